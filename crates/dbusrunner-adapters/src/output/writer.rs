use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use dbusrunner_core::{
    application::{ApplicationError, ports::RunOutput},
    error::RunnerResult,
};

/// Writes one `"<data> <action_id>"` line per run request.
///
/// Each line is flushed immediately so a watching terminal sees it while the
/// service is still running.
#[derive(Debug)]
pub struct WriterOutput<W> {
    writer: Mutex<W>,
}

impl WriterOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> RunOutput for WriterOutput<W> {
    fn emit(&self, data: &str, action_id: &str) -> RunnerResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ApplicationError::OutputFailed {
                reason: "output lock poisoned".into(),
            })?;

        writeln!(writer, "{data} {action_id}")
            .and_then(|()| writer.flush())
            .map_err(|e| {
                ApplicationError::OutputFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}
