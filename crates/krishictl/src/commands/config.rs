//! `krishictl config` - show the configuration in effect

use anyhow::Result;
use krishi_router::Config;

pub fn run(config: &Config) -> Result<()> {
    print!("{}", config.effective().to_toml()?);
    Ok(())
}
