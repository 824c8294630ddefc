//! Application layer errors.
//!
//! These errors represent failures in orchestration or at a port, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template with the requested id.
    #[error("Template resolution failed: {reason}")]
    TemplateResolution { reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Connecting, registering, or publishing on the bus failed.
    #[error("Bus {operation} failed: {reason}")]
    BusError {
        operation: &'static str,
        reason: String,
    },

    /// Writing the effect of a `Run` call failed.
    #[error("Run output failed: {reason}")]
    OutputFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateResolution { reason } => vec![
                format!("Resolution failed: {}", reason),
                "Try: dbusrunner list to see available templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::BusError { operation, .. } => match *operation {
                "name request" => vec![
                    "Another process already owns this bus name".into(),
                    "Stop the other runner or pick a different --name".into(),
                ],
                _ => vec![
                    "Check that a session bus is running (DBUS_SESSION_BUS_ADDRESS)".into(),
                ],
            },
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateResolution { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::BusError { .. } => ErrorCategory::Internal,
            Self::OutputFailed { .. } => ErrorCategory::Internal,
        }
    }
}
