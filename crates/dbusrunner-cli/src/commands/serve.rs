//! Implementation of the `dbusrunner serve` command.

use std::sync::Arc;

use tracing::{debug, instrument};

use dbusrunner_adapters::{RunnerService, WriterOutput};
use dbusrunner_core::{
    application::HelloRunner,
    domain::{AppIdentity, PathStyle, ServiceIdentity},
};

use crate::{cli::ServeArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Register the stub runner and dispatch bus calls until killed.
///
/// Only returns on failure: invalid name (exit 2) or a bus error (exit 1).
#[instrument(skip_all)]
pub fn execute(args: ServeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let identity = resolve_identity(&args, &config)?;
    debug!(service = %identity, "Identity resolved");

    // stdout carries Run output only; progress goes to stderr.
    output.status(&format!(
        "Registering {} at {}",
        identity.bus_name(),
        identity.object_path(),
    ))?;

    let runner = HelloRunner::new(identity.app().clone(), Box::new(WriterOutput::stdout()));
    let service = RunnerService::new(identity, Arc::new(runner)).register()?;

    output.status(&format!("Serving {} (Ctrl+C to stop)", service.identity()))?;
    service.serve()
}

fn resolve_identity(args: &ServeArgs, config: &AppConfig) -> CliResult<ServiceIdentity> {
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| config.service.app_name.clone());
    let app = AppIdentity::new(name)?;

    let style = if args.scoped_path || config.service.scoped_path {
        PathStyle::AppScoped
    } else {
        PathStyle::Default
    };

    Ok(ServiceIdentity::new(app, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(name: Option<&str>, scoped_path: bool) -> ServeArgs {
        ServeArgs {
            name: name.map(str::to_owned),
            scoped_path,
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let id = resolve_identity(&args(None, false), &AppConfig::default()).unwrap();
        assert_eq!(id.bus_name(), "org.kde.dbusrunner");
        assert_eq!(id.object_path(), "/runner");
    }

    #[test]
    fn flags_override_config() {
        let id = resolve_identity(&args(Some("Greeter"), true), &AppConfig::default()).unwrap();
        assert_eq!(id.bus_name(), "org.kde.greeter");
        assert_eq!(id.object_path(), "/greeter");
    }

    #[test]
    fn config_can_scope_the_path() {
        let mut config = AppConfig::default();
        config.service.scoped_path = true;
        let id = resolve_identity(&args(Some("Greeter"), false), &config).unwrap();
        assert_eq!(id.object_path(), "/greeter");
    }

    #[test]
    fn invalid_name_is_user_error() {
        let err = resolve_identity(&args(Some("my-runner"), false), &AppConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
