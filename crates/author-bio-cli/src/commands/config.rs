//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("Author Bio CLI Configuration");
    println!("{:-<40}", "");
    println!("Default Format:   {}", config.default_format);
    println!("Output Directory: {}", config.output_dir.display());

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "default-format" | "format" => {
            config.default_format = value.parse()?;
            println!("Set default-format to: {}", config.default_format);
        }
        "output-dir" => {
            config.output_dir = PathBuf::from(value);
            println!("Set output-dir to: {}", value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}. Valid keys: default-format, output-dir",
                key
            );
        }
    }

    config.save()?;
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "default-format" | "format" => config.default_format.to_string(),
        "output-dir" => config.output_dir.display().to_string(),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    Config::default().save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
