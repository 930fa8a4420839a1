//! Environment source: GENJOIN_<SECTION>__<KEY>, e.g. GENJOIN_EXECUTOR__KIND=serial

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("GENJOIN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
