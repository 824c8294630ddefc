pub mod hello_runner;
pub mod scaffold_service;
pub mod template_service;

pub use hello_runner::HelloRunner;
pub use scaffold_service::ScaffoldService;
pub use template_service::{TemplateInfo, TemplateService};
