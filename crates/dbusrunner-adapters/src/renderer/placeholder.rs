//! `%{KEY}` placeholder renderer.

use std::path::Path;

use dbusrunner_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{DomainValidator as validator, ProjectStructure, RenderContext, Template},
    error::{RunnerError, RunnerResult},
};
use tracing::{debug, instrument};

/// Renders file paths and contents through [`RenderContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// Create a new placeholder renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(template = %template.id()))]
    fn render(
        &self,
        template: &Template,
        context: &RenderContext,
        output_root: &Path,
    ) -> RunnerResult<ProjectStructure> {
        validator::validate_template(template)?;

        let mut structure = ProjectStructure::new(output_root);

        for file in &template.files {
            let path = context
                .render_path(&file.path)
                .map_err(|e| rendering_failed(&file.path, e))?;
            let content = context
                .render(&file.content)
                .map_err(|e| rendering_failed(&file.path, e))?;
            debug!(path = %path.display(), bytes = content.len(), "rendered file");
            structure.add_file(path, content, file.executable);
        }

        // Rendered paths may collide even when the raw ones do not.
        validator::validate_project_structure(&structure)?;

        Ok(structure)
    }
}

fn rendering_failed(path: &Path, e: impl std::fmt::Display) -> RunnerError {
    ApplicationError::RenderingFailed {
        reason: format!("{}: {}", path.display(), e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbusrunner_core::domain::{AppIdentity, DomainError, TemplateFile};

    fn context() -> RenderContext {
        RenderContext::new(&AppIdentity::new("Greeter").unwrap(), "Ada", "ada@example.org", 2026)
    }

    #[test]
    fn substitutes_paths_and_contents() {
        let template = Template::builder()
            .id("t")
            .file(TemplateFile::new("%{APPNAMELC}.desktop", "Name=%{APPNAME}"))
            .file(TemplateFile::new("run.sh", "echo %{CURRENT_YEAR}").executable())
            .build()
            .unwrap();

        let structure = PlaceholderRenderer::new()
            .render(&template, &context(), Path::new("out"))
            .unwrap();

        let files: Vec<_> = structure.files().collect();
        assert_eq!(files[0].path, Path::new("greeter.desktop"));
        assert_eq!(files[0].content, "Name=Greeter");
        assert_eq!(files[1].content, "echo 2026");
        assert!(files[1].executable);
        assert_eq!(structure.root(), Path::new("out"));
    }

    #[test]
    fn unknown_placeholder_fails_rendering() {
        let template = Template::builder()
            .id("t")
            .file(TemplateFile::new("a.txt", "%{NOPE}"))
            .build()
            .unwrap();

        let err = PlaceholderRenderer::new()
            .render(&template, &context(), Path::new("out"))
            .unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Application(ApplicationError::RenderingFailed { .. })
        ));
        assert!(err.to_string().contains("NOPE"));
    }

    #[test]
    fn colliding_rendered_paths_are_rejected() {
        let template = Template::builder()
            .id("t")
            .file(TemplateFile::new("%{APPNAMELC}.txt", ""))
            .file(TemplateFile::new("greeter.txt", ""))
            .build()
            .unwrap();

        let err = PlaceholderRenderer::new()
            .render(&template, &context(), Path::new("out"))
            .unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Domain(DomainError::DuplicatePath { .. })
        ));
    }
}
