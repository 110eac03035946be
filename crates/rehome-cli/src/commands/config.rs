use rehome_config::RehomeConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn handle(config: &RehomeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format, || {
        serde_json::to_string_pretty(config).ok()
    })
}
