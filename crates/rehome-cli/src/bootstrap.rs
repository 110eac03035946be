use anyhow::Context;
use rehome_config::RehomeConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RehomeConfig> {
    let mut config = RehomeConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    tracing::debug!(
        base_url = config.server.base_url(),
        payload = ?config.server.payload,
        in_flight = ?config.general.in_flight,
        "configuration loaded"
    );
    Ok(config)
}

fn apply_overrides(config: &mut RehomeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &flags.base_url {
        tracing::debug!(base_url = %base_url, "overriding server.base_url from --base-url");
        config.server.base_url.clone_from(base_url);
        config
            .server
            .validate()
            .context("invalid --base-url")?;
    }
    Ok(())
}
