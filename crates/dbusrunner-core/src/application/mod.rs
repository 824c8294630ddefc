//! Application layer for dbusrunner.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (HelloRunner, ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the records and rules
//! themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    HelloRunner, ScaffoldService,
    TemplateInfo, // DTO for template metadata
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, RunOutput, Runner, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
