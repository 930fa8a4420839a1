//! Merge rules: defaults and override order.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("executor.kind", "concurrent")?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.color", true)
}
