//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?,
    };

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(());
    }

    Config::default().save(&path)?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    output.success(&format!("✓ Created config at {}", path.display()))?;
    output.info("Edit it to change the default output format, color, or log level.")?;

    Ok(())
}

/// Handle config show subcommand
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as JSON: {}", e)))?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| Error::config(format!("Failed to serialize as YAML: {}", e)))?,
    };

    output.writeln(content.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::io;
    use tempfile::tempdir;

    fn sink() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, false, 0, Box::new(io::sink()))
    }

    #[test]
    fn test_init_respects_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("verprec").join("config.toml");

        let init = |force| ConfigInitArgs {
            path: Some(path.clone()),
            force,
        };

        handle_config_init(init(false), &mut sink()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());

        std::fs::write(&path, "[output]\ncolor = false\n").unwrap();
        handle_config_init(init(false), &mut sink()).unwrap();
        assert!(!Config::from_file(&path).unwrap().output.color);

        handle_config_init(init(true), &mut sink()).unwrap();
        assert!(Config::from_file(&path).unwrap().output.color);
    }

    #[test]
    fn test_show_formats() {
        for format in [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml] {
            let args = ConfigShowArgs { format };
            assert!(handle_config_show(args, &Config::default(), &mut sink()).is_ok());
        }
    }
}
