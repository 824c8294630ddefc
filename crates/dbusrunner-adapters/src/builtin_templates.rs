//! Templates compiled into the binary.
//!
//! Both templates produce the same project; they differ only in the object
//! path the generated runner registers at (see [`PathStyle`]).

use dbusrunner_core::domain::{DomainError, PathStyle, Template, TemplateFile};

const CARGO_TOML: &str = include_str!("../templates/common/Cargo.toml.in");
const README: &str = include_str!("../templates/common/README.md.in");
const DBUS_SERVICE: &str = include_str!("../templates/common/dbus.service.in");

const RUNNER_MAIN: &str = include_str!("../templates/runner/main.rs.in");
const RUNNER_DESKTOP: &str = include_str!("../templates/runner/runner.desktop.in");

const SCOPED_MAIN: &str = include_str!("../templates/runner-scoped/main.rs.in");
const SCOPED_DESKTOP: &str = include_str!("../templates/runner-scoped/runner.desktop.in");

/// Every built-in template.
pub fn all_templates() -> Result<Vec<Template>, DomainError> {
    Ok(vec![runner()?, runner_scoped()?])
}

/// Runner registered at `/runner`.
pub fn runner() -> Result<Template, DomainError> {
    build(
        "runner",
        "D-Bus search runner at the default object path",
        PathStyle::Default,
        RUNNER_MAIN,
        RUNNER_DESKTOP,
    )
}

/// Runner registered at `/<appnamelc>`.
pub fn runner_scoped() -> Result<Template, DomainError> {
    build(
        "runner-scoped",
        "D-Bus search runner at an object path named after the app",
        PathStyle::AppScoped,
        SCOPED_MAIN,
        SCOPED_DESKTOP,
    )
}

fn build(
    id: &str,
    description: &str,
    path_style: PathStyle,
    main_rs: &str,
    desktop: &str,
) -> Result<Template, DomainError> {
    Template::builder()
        .id(id)
        .description(description)
        .path_style(path_style)
        .file(TemplateFile::new("Cargo.toml", CARGO_TOML))
        .file(TemplateFile::new("src/main.rs", main_rs))
        .file(TemplateFile::new("%{APPNAMELC}.desktop", desktop))
        .file(TemplateFile::new(
            "org.kde.%{APPNAMELC}.service",
            DBUS_SERVICE,
        ))
        .file(TemplateFile::new("README.md", README))
        .build()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use dbusrunner_core::domain::{AppIdentity, RenderContext, ServiceIdentity};

    fn ctx() -> RenderContext {
        RenderContext::new(
            &AppIdentity::new("MyRunner").unwrap(),
            "Jane Doe",
            "jane@example.org",
            2026,
        )
    }

    #[test]
    fn every_builtin_renders_cleanly() {
        let ctx = ctx();
        for template in all_templates().unwrap() {
            for file in &template.files {
                let out = ctx
                    .render(&file.content)
                    .unwrap_or_else(|e| panic!("{}/{}: {e}", template.id(), file.path.display()));
                assert!(!out.contains("%{"), "{}", file.path.display());
                assert!(
                    out.contains("SPDX-FileCopyrightText: 2026 Jane Doe <jane@example.org>"),
                    "missing SPDX header in {}",
                    file.path.display()
                );
            }
        }
    }

    #[test]
    fn desktop_file_agrees_with_service_identity() {
        let ctx = ctx();
        let app = AppIdentity::new("MyRunner").unwrap();

        for template in all_templates().unwrap() {
            let identity = ServiceIdentity::new(app.clone(), template.metadata.path_style);
            let desktop = template
                .files
                .iter()
                .find(|f| f.path.to_string_lossy().ends_with(".desktop"))
                .unwrap();
            let main_rs = template
                .files
                .iter()
                .find(|f| f.path.ends_with("src/main.rs"))
                .unwrap();

            let desktop = ctx.render(&desktop.content).unwrap();
            assert!(desktop.contains(&format!(
                "X-Plasma-DBusRunner-Service={}",
                identity.bus_name()
            )));
            assert!(desktop.contains(&format!(
                "X-Plasma-DBusRunner-Path={}",
                identity.object_path()
            )));

            assert!(desktop.contains("X-Plasma-Runner-Lifecycle-Methods=true"));

            let main_rs = ctx.render(&main_rs.content).unwrap();
            assert!(main_rs.contains(&format!("\"{}\"", identity.object_path())));
            assert!(main_rs.contains("Hello from MyRunner!"));
            assert!(main_rs.contains(r#"#[zbus(name = "Teardown")]"#));
        }
    }

    #[test]
    fn activation_file_execs_an_absolute_path() {
        let ctx = ctx()
            .with_bindir(Path::new("/home/jane/.cargo/bin"))
            .unwrap();

        for template in all_templates().unwrap() {
            let service = template
                .files
                .iter()
                .find(|f| f.path.to_string_lossy().ends_with(".service"))
                .unwrap();
            let service = ctx.render(&service.content).unwrap();

            let exec = service
                .lines()
                .find_map(|l| l.strip_prefix("Exec="))
                .unwrap();
            assert_eq!(exec, "/home/jane/.cargo/bin/myrunner");
            assert!(Path::new(exec).is_absolute());
        }
    }

    #[test]
    fn default_activation_path_is_absolute() {
        let service = ctx().render(DBUS_SERVICE).unwrap();
        let exec = service
            .lines()
            .find_map(|l| l.strip_prefix("Exec="))
            .unwrap();
        assert!(Path::new(exec).is_absolute(), "{exec}");
    }
}
