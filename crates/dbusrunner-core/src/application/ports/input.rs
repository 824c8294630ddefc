//! Driving (input) ports - called by the bus adapter.

use crate::domain::{Query, RemoteAction, RemoteMatch};
use crate::error::RunnerResult;

/// The search contract a runner fulfils.
///
/// Handlers run synchronously, one call at a time per connection, and must
/// not block on other bus calls. Implementations hold no mutable state
/// across calls.
pub trait Runner: Send + Sync {
    /// Candidate matches for `query`. An empty list is a normal answer.
    fn match_query(&self, query: &Query) -> Vec<RemoteMatch>;

    /// Actions offered for this runner's matches.
    fn actions(&self) -> Vec<RemoteAction>;

    /// Perform `action_id` (empty for the default action) on the match whose
    /// id is `data`.
    fn run(&self, data: &str, action_id: &str) -> RunnerResult<()>;

    /// The host finished a match session.
    fn teardown(&self) {}
}
