use std::sync::{Arc, Mutex};

use dbusrunner_core::{
    application::{ApplicationError, ports::RunOutput},
    error::RunnerResult,
};

/// Records run requests instead of printing them. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(data, action_id)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RunOutput for MemoryOutput {
    fn emit(&self, data: &str, action_id: &str) -> RunnerResult<()> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::OutputFailed {
                reason: "output lock poisoned".into(),
            })?
            .push((data.to_owned(), action_id.to_owned()));
        Ok(())
    }
}
