//! Fork-join executor: every generator runs as its own unit of work on the
//! tokio blocking pool, and outputs are joined in task order once all units
//! have finished.

use super::Executor;
use crate::error::{BoxError, ExecutionError};
use crate::generator::SharedGenerator;
use futures::future::join_all;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Runs each generator concurrently and concatenates results in submission order.
///
/// At most `max_concurrency` generators run at the same time. Every generator
/// runs to completion even when a sibling fails; if any failed, the failure
/// with the lowest task index is reported.
#[derive(Debug, Clone)]
pub struct ConcurrentExecutor {
    max_concurrency: usize,
}

impl Default for ConcurrentExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcurrentExecutor {
    /// Executor capped at the host's available parallelism.
    pub fn new() -> Self {
        let cores = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::with_max_concurrency(cores)
    }

    /// Executor capped at `limit` simultaneous generators (minimum 1).
    pub fn with_max_concurrency(limit: usize) -> Self {
        Self {
            max_concurrency: limit.max(1),
        }
    }

    /// Maximum number of generators running at the same time.
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Fan out over the generators from inside an existing tokio runtime.
    pub async fn execute_async(
        &self,
        generators: &[SharedGenerator],
    ) -> Result<String, ExecutionError> {
        let total = generators.len();
        if total == 0 {
            return Ok(String::new());
        }

        debug!(
            executor = "concurrent",
            tasks = total,
            max_concurrency = self.max_concurrency,
            "Executing generators"
        );

        let permits = Arc::new(Semaphore::new(self.max_concurrency));
        let mut units = Vec::with_capacity(total);
        for generator in generators {
            let permit = Arc::clone(&permits)
                .acquire_owned()
                .await
                .map_err(|e| ExecutionError::with_cause("concurrency limiter closed", e))?;
            let generator = Arc::clone(generator);
            units.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                generator.generate()
            }));
        }

        // Join barrier: handles resolve in task order, whatever order the units finish in.
        let outcomes = join_all(units).await;

        let mut buffer = String::new();
        let mut first_failure: Option<(usize, BoxError)> = None;
        for (index, outcome) in outcomes.into_iter().enumerate() {
            let result = match outcome {
                Ok(result) => result,
                Err(join_err) => Err(BoxError::from(join_err)),
            };
            match result {
                Ok(output) => buffer.push_str(&output),
                Err(err) => {
                    warn!(executor = "concurrent", index, error = %err, "Generator failed");
                    if first_failure.is_none() {
                        first_failure = Some((index, err));
                    }
                }
            }
        }

        if let Some((index, err)) = first_failure {
            return Err(ExecutionError::with_cause(
                format!("generator {} of {} failed", index, total),
                err,
            ));
        }

        debug!(executor = "concurrent", bytes = buffer.len(), "Generators completed");
        Ok(buffer)
    }

    /// Drive [`execute_async`](Self::execute_async) on a per-call runtime owned by this thread.
    fn run_to_completion(&self, generators: &[SharedGenerator]) -> Result<String, ExecutionError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .max_blocking_threads(self.max_concurrency)
            .build()
            .map_err(|e| ExecutionError::with_cause("failed to start execution runtime", e))?;

        rt.block_on(self.execute_async(generators))
    }
}

impl Executor for ConcurrentExecutor {
    fn execute(&self, generators: &[SharedGenerator]) -> Result<String, ExecutionError> {
        if generators.is_empty() {
            return Ok(String::new());
        }

        if tokio::runtime::Handle::try_current().is_err() {
            return self.run_to_completion(generators);
        }

        // A runtime cannot be blocked on from a thread that is already inside one.
        std::thread::scope(|scope| {
            scope
                .spawn(|| self.run_to_completion(generators))
                .join()
                .unwrap_or_else(|_| Err(ExecutionError::new("execution thread panicked")))
        })
    }
}
