use std::path::PathBuf;

use anyhow::Result;
use evently_core::config::EventlyConfig;
use owo_colors::OwoColorize;

pub fn run(
    mut config: EventlyConfig,
    data_dir: Option<PathBuf>,
    refresh_delay_ms: Option<u64>,
) -> Result<()> {
    let config_path = EventlyConfig::config_path()?;

    if data_dir.is_some() || refresh_delay_ms.is_some() {
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        if let Some(ms) = refresh_delay_ms {
            config.refresh_delay_ms = ms;
        }
        config.save()?;
        println!("{}", "Saved configuration".green());
        println!();
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Refresh delay:  {}ms", config.refresh_delay_ms);

    Ok(())
}
