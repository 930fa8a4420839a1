//! Generator capability consumed by the executors.
//!
//! A generator produces one string per call or fails. How it computes that
//! string (pattern expansion, lookups, anything else) is up to the
//! implementation; executors only decide how many calls happen and in which
//! order their outputs are joined.

use crate::error::BoxError;
use std::sync::Arc;

/// Produces a string, possibly failing.
///
/// Implementations must be `Send + Sync` because the concurrent executor calls
/// independent generators from different threads.
///
/// # Shared instances
///
/// The same instance may appear in several slots of one task list (see
/// [`execute_repeated`](crate::executor::execute_repeated)). Under the
/// concurrent executor those slots are invoked at the same time. A generator
/// with internal mutable state must synchronize it itself; the executors do
/// not serialize calls to one instance.
pub trait Generator: Send + Sync {
    fn generate(&self) -> Result<String, BoxError>;
}

/// Reference-counted generator as stored in task lists.
pub type SharedGenerator = Arc<dyn Generator>;

impl<F, E> Generator for F
where
    F: Fn() -> Result<String, E> + Send + Sync,
    E: Into<BoxError>,
{
    fn generate(&self) -> Result<String, BoxError> {
        self().map_err(Into::into)
    }
}

/// Wrap a closure as a [`SharedGenerator`].
pub fn generator<F, E>(f: F) -> SharedGenerator
where
    F: Fn() -> Result<String, E> + Send + Sync + 'static,
    E: Into<BoxError> + 'static,
{
    Arc::new(f)
}
