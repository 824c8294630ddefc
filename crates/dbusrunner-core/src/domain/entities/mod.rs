pub mod identity;
pub mod project_structure;
pub mod remote;
pub mod template;

pub use identity::{AppIdentity, ServiceIdentity};
pub use project_structure::{FileToWrite, ProjectStructure};
pub use remote::{MatchProperties, Query, RemoteAction, RemoteMatch, RemoteMatchBuilder};
pub use template::{
    RenderContext, Template, TemplateBuilder, TemplateFile, TemplateId, TemplateMetadata,
};
