//! Project templates and placeholder substitution.
//!
//! A template is an ordered list of files whose paths and contents may carry
//! `%{KEY}` placeholders. [`RenderContext`] resolves them.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::identity::AppIdentity, error::DomainError, value_objects::PathStyle,
};

// ── Placeholders ──────────────────────────────────────────────────────────────

/// The placeholders every template may use.
pub mod placeholders {
    pub const APPNAME: &str = "APPNAME";
    pub const APPNAMELC: &str = "APPNAMELC";
    pub const AUTHOR: &str = "AUTHOR";
    pub const EMAIL: &str = "EMAIL";
    pub const CURRENT_YEAR: &str = "CURRENT_YEAR";
    /// Directory the generated binary is installed into. Always absolute.
    pub const BINDIR: &str = "BINDIR";
}

/// `BINDIR` when nothing better is known.
pub const DEFAULT_BINDIR: &str = "/usr/local/bin";

/// Values substituted into a template at generation time.
///
/// # Syntax
///
/// `%{KEY}` is replaced by the value bound to `KEY`. A `%` not followed by
/// `{` is literal text. Unknown keys and unterminated `%{` are errors, so a
/// typo in a template never leaks into a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(
        app: &AppIdentity,
        author: impl Into<String>,
        email: impl Into<String>,
        year: i32,
    ) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(placeholders::APPNAME.to_owned(), app.name().to_owned());
        variables.insert(placeholders::APPNAMELC.to_owned(), app.lowercase().to_owned());
        variables.insert(placeholders::AUTHOR.to_owned(), author.into());
        variables.insert(placeholders::EMAIL.to_owned(), email.into());
        variables.insert(placeholders::CURRENT_YEAR.to_owned(), year.to_string());
        variables.insert(placeholders::BINDIR.to_owned(), DEFAULT_BINDIR.to_owned());
        Self { variables }
    }

    /// Bind `BINDIR`. The bus daemon does not search `PATH` when activating a
    /// service, so only absolute directories are accepted.
    pub fn with_bindir(self, dir: &Path) -> Result<Self, DomainError> {
        if !dir.is_absolute() {
            return Err(DomainError::RelativeBinDir {
                path: dir.display().to_string(),
            });
        }
        Ok(self.with_variable(placeholders::BINDIR, dir.display().to_string()))
    }

    /// Bind an additional placeholder, or override a built-in one.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every placeholder in `source`.
    pub fn render(&self, source: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(source.len());
        let mut rest = source;
        let mut consumed = 0;

        while let Some(start) = rest.find("%{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open
                .find('}')
                .ok_or(DomainError::UnterminatedPlaceholder {
                    offset: consumed + start,
                })?;
            let key = &after_open[..end];
            let value = self
                .get(key)
                .ok_or_else(|| DomainError::UnknownPlaceholder { key: key.to_owned() })?;
            out.push_str(value);

            let advance = start + 2 + end + 1;
            consumed += advance;
            rest = &rest[advance..];
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Substitute placeholders in a relative path.
    pub fn render_path(&self, path: &Path) -> Result<PathBuf, DomainError> {
        let rendered = self.render(&path.to_string_lossy())?;
        Ok(PathBuf::from(rendered))
    }
}

// ── TemplateId ────────────────────────────────────────────────────────────────

/// Unique template identifier (e.g. `runner`, `runner-scoped`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── Template ──────────────────────────────────────────────────────────────────

/// Descriptive data about a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMetadata {
    pub id: TemplateId,
    pub description: String,
    pub path_style: PathStyle,
}

/// One file in a template. `path` is relative and may contain placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub content: String,
    pub executable: bool,
}

impl TemplateFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub metadata: TemplateMetadata,
    pub files: Vec<TemplateFile>,
}

impl Template {
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    pub fn id(&self) -> &TemplateId {
        &self.metadata.id
    }

    /// Structural checks; placeholders are checked at render time.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyTemplate {
                template_id: self.metadata.id.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: file.path.display().to_string(),
                });
            }
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TemplateBuilder {
    id: Option<TemplateId>,
    description: String,
    path_style: PathStyle,
    files: Vec<TemplateFile>,
}

impl TemplateBuilder {
    pub fn id(mut self, id: impl Into<TemplateId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    pub fn file(mut self, file: TemplateFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn build(self) -> Result<Template, DomainError> {
        let id = self
            .id
            .ok_or(DomainError::MissingRequiredField { field: "id" })?;
        let template = Template {
            metadata: TemplateMetadata {
                id,
                description: self.description,
                path_style: self.path_style,
            },
            files: self.files,
        };
        template.validate()?;
        Ok(template)
    }
}
