//! Scaffold Service - project generation orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Resolve template by id
//! 2. Render template with placeholder context
//! 3. Write to filesystem, rolling back on failure

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{ProjectStructure, RenderContext, TemplateId},
    error::RunnerResult,
};

/// Main scaffolding service.
///
/// Orchestrates the template resolution, rendering, and writing workflow.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Render a template without touching the filesystem.
    pub fn plan(
        &self,
        template_id: &TemplateId,
        context: &RenderContext,
        project_root: &Path,
    ) -> RunnerResult<ProjectStructure> {
        let template = self.store.get(template_id)?;
        self.renderer.render(&template, context, project_root)
    }

    /// Generate a project at `project_root`.
    ///
    /// With `overwrite`, an existing directory at `project_root` is removed
    /// first.
    #[instrument(
        skip_all,
        fields(template = %template_id, root = %project_root.display())
    )]
    pub fn scaffold(
        &self,
        template_id: &TemplateId,
        context: &RenderContext,
        project_root: &Path,
        overwrite: bool,
    ) -> RunnerResult<ProjectStructure> {
        let structure = self.plan(template_id, context, project_root)?;
        info!(files = structure.file_count(), "Template rendered");

        if self.filesystem.exists(structure.root()) {
            if !overwrite {
                return Err(ApplicationError::ProjectExists {
                    path: structure.root().to_path_buf(),
                }
                .into());
            }
            warn!("Removing existing project directory");
            self.filesystem.remove_dir_all(structure.root())?;
        }

        self.write_structure(&structure)?;
        info!("Scaffold completed successfully");
        Ok(structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> RunnerResult<()> {
        match self.write_all(structure) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> RunnerResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for file in structure.files() {
            let path = structure.root().join(&file.path);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, &file.content)?;

            if file.executable {
                self.filesystem.set_executable(&path)?;
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
