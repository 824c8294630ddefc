// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the application layer unchanged)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid application name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{template_id}' has no files")]
    EmptyTemplate { template_id: String },

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Placeholder Errors
    // ========================================================================
    #[error("Unknown placeholder '%{{{key}}}'")]
    UnknownPlaceholder { key: String },

    #[error("Unterminated placeholder starting at byte {offset}")]
    UnterminatedPlaceholder { offset: usize },

    #[error("Install directory must be absolute: {path}")]
    RelativeBinDir { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAppName { name, reason } => vec![
                format!("'{}' cannot be used as an application name: {}", name, reason),
                "Start with a letter or '_', then use letters, digits, or '_'".into(),
                "Examples: MyRunner, notes_search, Calc2".into(),
            ],
            Self::UnknownPlaceholder { key } => vec![
                format!("'%{{{}}}' is not a known placeholder", key),
                "Known placeholders: APPNAME, APPNAMELC, AUTHOR, EMAIL, CURRENT_YEAR, BINDIR"
                    .into(),
            ],
            Self::RelativeBinDir { path } => vec![
                format!("The session bus cannot start '{}/...' without a full path", path),
                "Pass an absolute directory, e.g. --bindir ~/.cargo/bin".into(),
            ],
            Self::UnterminatedPlaceholder { .. } => {
                vec!["Close every '%{' with a matching '}'".into()]
            }
            Self::EmptyTemplate { template_id } => vec![
                format!("Template '{}' is corrupted", template_id),
                "Please report this issue or use a different template".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAppName { .. }
            | Self::UnknownPlaceholder { .. }
            | Self::UnterminatedPlaceholder { .. }
            | Self::RelativeBinDir { .. } => ErrorCategory::Validation,
            Self::InvalidTemplate(_)
            | Self::EmptyTemplate { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
