//! Repeat runner: one generator executed n times through any executor.

use super::Executor;
use crate::error::ExecutionError;
use crate::generator::SharedGenerator;
use std::sync::Arc;

/// Execute a single generator `n` times with `executor`.
///
/// Every slot refers to the same generator instance, so a stateful generator
/// run through the concurrent executor must synchronize itself.
pub fn execute_repeated(
    executor: &dyn Executor,
    generator: SharedGenerator,
    n: usize,
) -> Result<String, ExecutionError> {
    let generators: Vec<SharedGenerator> = (0..n).map(|_| Arc::clone(&generator)).collect();
    executor.execute(&generators)
}
