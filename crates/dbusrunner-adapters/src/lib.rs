//! Infrastructure adapters for dbusrunner.
//!
//! This crate implements the ports defined in `dbusrunner-core::application::ports`
//! and drives the `Runner` port from the session bus. It contains all external
//! dependencies and I/O operations.

pub mod builtin_templates;
pub mod dbus;
pub mod filesystem;
pub mod output;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use dbus::{RunnerInterface, RunnerService};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use output::{MemoryOutput, WriterOutput};
pub use renderer::PlaceholderRenderer;
pub use template_store::InMemoryStore;
