//! Registration lifecycle of a runner on the session bus.
//!
//! ```text
//! RunnerService<Unregistered> --register()--> RunnerService<Registered> --serve()--> (never returns)
//! ```
//!
//! The object is exported before the well-known name is requested, so the
//! host never sees the name without the object behind it.

use std::sync::Arc;

use dbusrunner_core::{
    application::{ApplicationError, ports::Runner},
    domain::ServiceIdentity,
    error::{RunnerError, RunnerResult},
};
use tracing::{info, instrument};
use zbus::blocking::Connection;

use super::interface::RunnerInterface;

/// Not yet on the bus.
pub struct Unregistered {
    runner: Arc<dyn Runner>,
}

/// Name owned and object exported.
pub struct Registered {
    connection: Connection,
}

pub struct RunnerService<S> {
    identity: ServiceIdentity,
    state: S,
}

impl<S> RunnerService<S> {
    pub fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }
}

impl RunnerService<Unregistered> {
    pub fn new(identity: ServiceIdentity, runner: Arc<dyn Runner>) -> Self {
        Self {
            identity,
            state: Unregistered { runner },
        }
    }

    /// Connect to the session bus, export the interface and claim the name.
    #[instrument(skip(self), fields(service = %self.identity))]
    pub fn register(self) -> RunnerResult<RunnerService<Registered>> {
        let connection = Connection::session().map_err(bus_error("connection"))?;

        let exported = connection
            .object_server()
            .at(
                self.identity.object_path(),
                RunnerInterface::new(self.state.runner),
            )
            .map_err(bus_error("object registration"))?;
        if !exported {
            return Err(ApplicationError::BusError {
                operation: "object registration",
                reason: format!(
                    "an object is already registered at {}",
                    self.identity.object_path()
                ),
            }
            .into());
        }

        connection
            .request_name(self.identity.bus_name())
            .map_err(bus_error("name request"))?;

        info!(
            bus_name = self.identity.bus_name(),
            object_path = self.identity.object_path(),
            interface = self.identity.interface(),
            "Runner registered"
        );

        Ok(RunnerService {
            identity: self.identity,
            state: Registered { connection },
        })
    }
}

impl RunnerService<Registered> {
    /// Dispatch bus calls until the process is killed.
    ///
    /// zbus answers calls on its own executor thread; this thread only keeps
    /// the connection alive.
    pub fn serve(self) -> ! {
        info!(service = %self.identity, "Serving");
        loop {
            std::thread::park();
        }
    }
}

fn bus_error(operation: &'static str) -> impl FnOnce(zbus::Error) -> RunnerError {
    move |e| {
        ApplicationError::BusError {
            operation,
            reason: e.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbusrunner_core::{
        application::HelloRunner,
        domain::{AppIdentity, PathStyle},
    };

    use crate::output::MemoryOutput;

    fn unregistered(style: PathStyle) -> RunnerService<Unregistered> {
        let app = AppIdentity::new("Greeter").unwrap();
        let runner = HelloRunner::new(app.clone(), Box::new(MemoryOutput::new()));
        RunnerService::new(ServiceIdentity::new(app, style), Arc::new(runner))
    }

    #[test]
    fn identity_is_fixed_before_registration() {
        let service = unregistered(PathStyle::AppScoped);
        assert_eq!(service.identity().bus_name(), "org.kde.greeter");
        assert_eq!(service.identity().object_path(), "/greeter");
        assert_eq!(service.identity().interface(), "org.kde.krunner1");
    }

    #[test]
    fn bus_errors_keep_the_failed_step() {
        let err = bus_error("name request")(zbus::Error::NameTaken);
        assert!(matches!(
            err,
            RunnerError::Application(ApplicationError::BusError {
                operation: "name request",
                ..
            })
        ));
        assert!(err.suggestions().iter().any(|s| s.contains("--name")));
    }
}
