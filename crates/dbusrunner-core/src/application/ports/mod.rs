//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces between the application
//! and the outside world. Adapters in `dbusrunner-adapters` implement or call
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template storage/retrieval
//!   - `TemplateRenderer`: Template rendering
//!   - `RunOutput`: Where the effect of a `Run` call lands
//!
//! - **Driving (Input) Ports**: Called by infrastructure, implemented by application
//!   - `Runner`: The search contract the bus adapter dispatches to

pub mod input;
pub mod output;

pub use input::Runner;
pub use output::{Filesystem, RunOutput, TemplateRenderer, TemplateStore};
