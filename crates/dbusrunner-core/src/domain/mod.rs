// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dbusrunner.
//!
//! This module contains pure data and rules with no I/O. Everything that
//! touches the bus, the filesystem, or stdout is reached through ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or bus calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable records**: Matches and actions are built once, then read
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    AppIdentity, FileToWrite, MatchProperties, ProjectStructure, Query, RemoteAction,
    RemoteMatch, RemoteMatchBuilder, RenderContext, ServiceIdentity, Template, TemplateBuilder,
    TemplateFile, TemplateId, TemplateMetadata,
    identity::{BUS_NAME_PREFIX, DEFAULT_OBJECT_PATH, RUNNER_INTERFACE},
    remote::keys as property_keys,
    template::placeholders,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{PathStyle, PropertyValue, QueryType, Relevance};

pub use validation::DomainValidator;
