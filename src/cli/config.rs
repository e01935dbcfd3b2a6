//! CLI command for configuration
//!
//! Shows the effective settings, or writes a default configuration file
//! for editing.

use clap::Args;

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a default configuration file if none exists
    #[arg(long)]
    pub init: bool,
}

/// Handle the config command
pub fn handle_config_command(
    paths: &LedgerPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> LedgerResult<()> {
    if args.init {
        if paths.is_initialized() {
            println!(
                "Configuration already exists at: {}",
                paths.settings_file().display()
            );
        } else {
            settings.save(paths)?;
            println!(
                "Wrote default configuration to: {}",
                paths.settings_file().display()
            );
        }
        return Ok(());
    }

    println!("Configuration file: {}", paths.settings_file().display());
    println!("{}", serde_json::to_string_pretty(settings)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_file() {
        let dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(dir.path().join("config"));
        let settings = Settings::default();

        handle_config_command(&paths, &settings, ConfigArgs { init: true }).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.warning_threshold, settings.warning_threshold);

        // A second init leaves the existing file alone
        handle_config_command(&paths, &settings, ConfigArgs { init: true }).unwrap();
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_show_does_not_write() {
        let dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(dir.path().join("config"));

        handle_config_command(&paths, &Settings::default(), ConfigArgs { init: false }).unwrap();
        assert!(!paths.is_initialized());
    }
}
