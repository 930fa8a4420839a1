//! Configuration System
//!
//! Layered configuration for choosing and tuning an executor. Sources, lowest
//! precedence first: built-in defaults, the global config file, an explicit
//! config file, then `GENJOIN_*` environment variables.

use crate::error::ConfigError;
use crate::executor::{build_executor, Executor, ExecutorConfig};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod environment;
    pub mod global_file;
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenJoinConfig {
    /// Executor selection and limits
    #[serde(default)]
    pub executor: ExecutorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Executor(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Executor(msg) => write!(f, "Executor: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GenJoinConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.executor.validate() {
            errors.push(ValidationError::Executor(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the configured executor
    pub fn build_executor(&self) -> Box<dyn Executor> {
        build_executor(&self.executor)
    }
}

/// Loads [`GenJoinConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file (if present), `explicit` (if given, must
    /// exist) and environment overrides, then validate.
    pub fn load(explicit: Option<&Path>) -> Result<GenJoinConfig, ConfigError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = sources::environment::add_to_builder(builder);

        let config: GenJoinConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Load defaults plus a single file, ignoring global and environment sources.
    pub fn load_from_file(path: &Path) -> Result<GenJoinConfig, ConfigError> {
        let config: GenJoinConfig = merge::merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        Self::validated(config)
    }

    /// Path of the global config file, if a config directory can be resolved.
    pub fn global_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }

    fn validated(config: GenJoinConfig) -> Result<GenJoinConfig, ConfigError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ConfigError::Invalid(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
