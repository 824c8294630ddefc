use std::sync::Arc;

use dbusrunner_core::{application::ports::Runner, domain::Query};
use tracing::{debug, warn};

use super::wire::{WireAction, WireMatch};

/// Bus object serving `org.kde.krunner1` on behalf of a [`Runner`].
pub struct RunnerInterface {
    runner: Arc<dyn Runner>,
}

impl RunnerInterface {
    pub fn new(runner: Arc<dyn Runner>) -> Self {
        Self { runner }
    }
}

#[zbus::interface(name = "org.kde.krunner1")]
impl RunnerInterface {
    #[zbus(name = "Match")]
    fn match_(&self, query: String) -> Vec<WireMatch> {
        let matches = self.runner.match_query(&Query::new(query));
        debug!(count = matches.len(), "Match");
        matches.iter().map(WireMatch::from).collect()
    }

    #[zbus(name = "Actions")]
    fn actions(&self) -> Vec<WireAction> {
        self.runner.actions().iter().map(WireAction::from).collect()
    }

    #[zbus(name = "Run")]
    fn run(&self, data: String, action_id: String) -> zbus::fdo::Result<()> {
        self.runner.run(&data, &action_id).map_err(|e| {
            warn!(error = %e, data = %data, action_id = %action_id, "Run failed");
            zbus::fdo::Error::Failed(e.to_string())
        })
    }

    #[zbus(name = "Teardown")]
    fn teardown(&self) {
        self.runner.teardown();
    }
}
