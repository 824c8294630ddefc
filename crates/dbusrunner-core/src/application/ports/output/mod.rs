//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dbusrunner-adapters` crate provides implementations.

use crate::domain::{ProjectStructure, RenderContext, Template, TemplateId};
use crate::error::RunnerResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dbusrunner_adapters::filesystem::LocalFilesystem` (production)
/// - `dbusrunner_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RunnerResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> RunnerResult<()>;

    /// Mark a file executable.
    fn set_executable(&self, path: &Path) -> RunnerResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> RunnerResult<()>;
}

/// Port for template storage and retrieval.
///
/// Implemented by `dbusrunner_adapters::template_store::InMemoryStore`.
pub trait TemplateStore: Send + Sync {
    /// Get a specific template by ID.
    fn get(&self, id: &TemplateId) -> RunnerResult<Template>;

    /// List all available templates, ordered by id.
    fn list(&self) -> RunnerResult<Vec<Template>>;

    /// Insert or replace a template.
    fn insert(&self, template: Template) -> RunnerResult<()>;
}

/// Port for template rendering.
///
/// Implemented by `dbusrunner_adapters::renderer::PlaceholderRenderer`.
pub trait TemplateRenderer: Send + Sync {
    /// Render a template into a project structure rooted at `output_root`.
    fn render(
        &self,
        template: &Template,
        context: &RenderContext,
        output_root: &Path,
    ) -> RunnerResult<ProjectStructure>;
}

/// Port receiving the effect of a `Run` call.
///
/// Implemented by:
/// - `dbusrunner_adapters::output::WriterOutput` (production)
/// - `dbusrunner_adapters::output::MemoryOutput` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait RunOutput: Send + Sync {
    /// Record one run request.
    fn emit(&self, data: &str, action_id: &str) -> RunnerResult<()>;
}
