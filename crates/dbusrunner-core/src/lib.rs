//! dbusrunner Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for dbusrunner:
//! the search-runner contract served on the session bus, and the templates
//! that generate new runner projects.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         dbusrunner-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (HelloRunner, ScaffoldService, ...)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Runner, RunOutput, Store, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented / driven by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   dbusrunner-adapters (Infrastructure)  │
//! │ (zbus server, stdout, renderer, fs)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (RemoteMatch, ServiceIdentity, Template)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dbusrunner_core::prelude::*;
//!
//! let app = AppIdentity::new("Greeter")?;
//! let runner = HelloRunner::new(app, Box::new(output));
//! let matches = runner.match_query(&Query::from("hello"));
//! assert_eq!(matches.len(), 1);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        HelloRunner, ScaffoldService, TemplateInfo, TemplateService,
        ports::{Filesystem, RunOutput, Runner, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        AppIdentity, MatchProperties, PathStyle, ProjectStructure, PropertyValue, Query,
        QueryType, Relevance, RemoteAction, RemoteMatch, RenderContext, ServiceIdentity,
        Template, TemplateFile, TemplateId,
    };
    pub use crate::error::{RunnerError, RunnerResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
