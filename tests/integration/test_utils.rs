//! Shared test doubles for executor tests

use genjoin::{BoxError, Generator, SharedGenerator};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Records the index of every generator as it is invoked.
#[derive(Default)]
pub struct InvocationLog {
    calls: Mutex<Vec<usize>>,
}

impl InvocationLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record(&self, index: usize) {
        self.calls.lock().push(index);
    }

    /// Invoked indices, sorted.
    pub fn invoked(&self) -> Vec<usize> {
        let mut calls = self.calls.lock().clone();
        calls.sort_unstable();
        calls
    }
}

/// Generator that sleeps, logs its invocation, then returns a fixed outcome.
pub struct Scripted {
    pub index: usize,
    pub outcome: Result<&'static str, &'static str>,
    pub delay: Duration,
    pub log: Arc<InvocationLog>,
}

impl Generator for Scripted {
    fn generate(&self) -> Result<String, BoxError> {
        std::thread::sleep(self.delay);
        self.log.record(self.index);
        self.outcome.map(str::to_string).map_err(Into::into)
    }
}

/// Build a task list from `(outcome, delay_ms)` pairs sharing one log.
pub fn scripted(
    script: &[(Result<&'static str, &'static str>, u64)],
    log: &Arc<InvocationLog>,
) -> Vec<SharedGenerator> {
    script
        .iter()
        .enumerate()
        .map(|(index, (outcome, delay_ms))| {
            Arc::new(Scripted {
                index,
                outcome: *outcome,
                delay: Duration::from_millis(*delay_ms),
                log: Arc::clone(log),
            }) as SharedGenerator
        })
        .collect()
}
