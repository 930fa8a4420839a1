//! Genjoin: ordered execution of string generators
//!
//! Runs a list of independent generators either serially on the caller's
//! thread or concurrently as a fork-join, and concatenates their outputs in
//! the order the list was given.

pub mod config;
pub mod error;
pub mod executor;
pub mod generator;
pub mod logging;

pub use error::{BoxError, ExecutionError};
pub use executor::{
    build_executor, execute_repeated, ConcurrentExecutor, Executor, ExecutorConfig, ExecutorKind,
    SerialExecutor,
};
pub use generator::{generator, Generator, SharedGenerator};
