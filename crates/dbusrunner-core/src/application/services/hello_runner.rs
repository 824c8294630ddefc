//! The stub runner every generated project starts from.
//!
//! Answers `"hello"` with a single greeting, offers one action, and reports
//! `Run` requests to its [`RunOutput`].

use tracing::{debug, instrument, trace};

use crate::{
    application::ports::{RunOutput, Runner},
    domain::{AppIdentity, Query, QueryType, RemoteAction, RemoteMatch, Relevance},
    error::RunnerResult,
};

/// Query that produces a match. Compared exactly.
pub const TRIGGER_QUERY: &str = "hello";

pub const MATCH_ID: &str = "Hello";
pub const MATCH_ICON: &str = "document-edit";
pub const MATCH_SUBTEXT: &str = "Demo Subtext";

pub const ACTION_ID: &str = "id";
pub const ACTION_TEXT: &str = "Tooltip";
pub const ACTION_ICON: &str = "planetkde";

pub struct HelloRunner {
    app: AppIdentity,
    output: Box<dyn RunOutput>,
}

impl HelloRunner {
    pub fn new(app: AppIdentity, output: Box<dyn RunOutput>) -> Self {
        Self { app, output }
    }

    pub fn app(&self) -> &AppIdentity {
        &self.app
    }

    fn greeting(&self) -> RemoteMatch {
        RemoteMatch::builder(MATCH_ID, format!("Hello from {}!", self.app.name()))
            .icon(MATCH_ICON)
            .query_type(QueryType::ExactMatch)
            .relevance(Relevance::MAX)
            .subtext(MATCH_SUBTEXT)
            .build()
    }
}

impl Runner for HelloRunner {
    #[instrument(skip(self), fields(app = %self.app))]
    fn match_query(&self, query: &Query) -> Vec<RemoteMatch> {
        if query.as_str() == TRIGGER_QUERY {
            debug!("query matched");
            vec![self.greeting()]
        } else {
            trace!("no match");
            Vec::new()
        }
    }

    fn actions(&self) -> Vec<RemoteAction> {
        vec![RemoteAction::new(ACTION_ID, ACTION_TEXT, ACTION_ICON)]
    }

    #[instrument(skip(self), fields(app = %self.app))]
    fn run(&self, data: &str, action_id: &str) -> RunnerResult<()> {
        debug!("running action");
        self.output.emit(data, action_id)
    }

    fn teardown(&self) {
        debug!(app = %self.app, "match session ended");
    }
}
