//! Application and bus identities.
//!
//! An [`AppIdentity`] is what the project generator asks for; a
//! [`ServiceIdentity`] is what the service registers on the bus. The second
//! is always derived from the first.

use std::fmt;

use crate::domain::{error::DomainError, value_objects::PathStyle};

/// Interface every runner object implements.
pub const RUNNER_INTERFACE: &str = "org.kde.krunner1";

/// Prefix of the well-known bus name.
pub const BUS_NAME_PREFIX: &str = "org.kde.";

/// Object path used when the runner does not scope it to its own name.
pub const DEFAULT_OBJECT_PATH: &str = "/runner";

/// Display name plus the lowercase identifier derived from it.
///
/// Invariant: `name` is an ASCII identifier (`[A-Za-z_][A-Za-z0-9_]*`), so
/// `lowercase` is valid both as a bus-name element and an object-path element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppIdentity {
    name: String,
    lowercase: String,
}

impl AppIdentity {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_app_name(&name)?;
        let lowercase = name.to_ascii_lowercase();
        Ok(Self { name, lowercase })
    }

    /// `APPNAME`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `APPNAMELC`
    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }
}

impl fmt::Display for AppIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn validate_app_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidAppName {
        name: name.to_owned(),
        reason: reason.to_owned(),
    };

    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| invalid("name cannot be empty"))?;

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid("must start with an ASCII letter or '_'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }
    // D-Bus caps a bus name at 255 bytes; leave room for the prefix.
    if BUS_NAME_PREFIX.len() + name.len() > 255 {
        return Err(invalid("name is too long for a bus name"));
    }
    Ok(())
}

/// Where a runner lives on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    app: AppIdentity,
    bus_name: String,
    object_path: String,
}

impl ServiceIdentity {
    pub fn new(app: AppIdentity, style: PathStyle) -> Self {
        let bus_name = format!("{BUS_NAME_PREFIX}{}", app.lowercase());
        let object_path = object_path_for(&app, style);
        Self {
            app,
            bus_name,
            object_path,
        }
    }

    pub fn app(&self) -> &AppIdentity {
        &self.app
    }

    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }

    pub fn object_path(&self) -> &str {
        &self.object_path
    }

    pub fn interface(&self) -> &'static str {
        RUNNER_INTERFACE
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.bus_name, self.object_path, RUNNER_INTERFACE
        )
    }
}

/// Object path a template variant publishes at.
pub fn object_path_for(app: &AppIdentity, style: PathStyle) -> String {
    match style {
        PathStyle::Default => DEFAULT_OBJECT_PATH.to_owned(),
        PathStyle::AppScoped => format!("/{}", app.lowercase()),
    }
}
