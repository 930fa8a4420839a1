//! Executors: strategies for running a task list of generators and joining
//! their outputs in submission order.

use crate::error::ExecutionError;
use crate::generator::SharedGenerator;
use serde::{Deserialize, Serialize};

mod concurrent;
mod repeat;
mod serial;

pub use concurrent::ConcurrentExecutor;
pub use repeat::execute_repeated;
pub use serial::SerialExecutor;

/// Runs a list of generators and returns their outputs concatenated in list order.
///
/// On failure exactly one error is returned and no partial output.
pub trait Executor: Send + Sync {
    fn execute(&self, generators: &[SharedGenerator]) -> Result<String, ExecutionError>;
}

/// Execution strategy, chosen once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    Serial,
    #[default]
    Concurrent,
}

/// Executor settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    #[serde(default)]
    pub kind: ExecutorKind,

    /// Upper bound on simultaneously running generators (concurrent only).
    /// Unset means the host's available parallelism.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl ExecutorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrency == Some(0) {
            return Err("max_concurrency must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Build the executor described by `config`.
pub fn build_executor(config: &ExecutorConfig) -> Box<dyn Executor> {
    match config.kind {
        ExecutorKind::Serial => Box::new(SerialExecutor::new()),
        ExecutorKind::Concurrent => match config.max_concurrency {
            Some(limit) => Box::new(ConcurrentExecutor::with_max_concurrency(limit)),
            None => Box::new(ConcurrentExecutor::new()),
        },
    }
}
