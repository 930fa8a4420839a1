//! Serial executor: one generator after the other on the calling thread.

use super::Executor;
use crate::error::ExecutionError;
use crate::generator::SharedGenerator;
use tracing::{debug, warn};

/// Runs generators in list order on the caller's thread and stops at the first failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialExecutor;

impl SerialExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SerialExecutor {
    fn execute(&self, generators: &[SharedGenerator]) -> Result<String, ExecutionError> {
        debug!(executor = "serial", tasks = generators.len(), "Executing generators");

        let mut buffer = String::new();
        for (index, generator) in generators.iter().enumerate() {
            match generator.generate() {
                Ok(output) => buffer.push_str(&output),
                Err(err) => {
                    warn!(executor = "serial", index, error = %err, "Generator failed");
                    return Err(ExecutionError::with_cause(
                        format!("generator {} failed", index),
                        err,
                    ));
                }
            }
        }

        debug!(executor = "serial", bytes = buffer.len(), "Generators completed");
        Ok(buffer)
    }
}
