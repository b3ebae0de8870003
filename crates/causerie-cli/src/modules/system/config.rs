use std::fs;
use std::path::{Path, PathBuf};

use super::types::CliConfig;
use crate::cli_args::{ConfigArgs, ConfigCommand};

/// Applies a config subcommand. Returns whether `config` changed.
pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<bool> {
    match args.command {
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
            Ok(false)
        }
        ConfigCommand::SetMe(args) => {
            config.me = Some(args.identity);
            Ok(true)
        }
        ConfigCommand::ClearMe => Ok(config.me.take().is_some()),
        ConfigCommand::SetAvatar(args) => {
            let mut avatar = config.avatar.clone();
            if let Some(format) = args.format {
                avatar.format = format;
            }
            if let Some(quality) = args.quality {
                avatar.quality = quality;
            }
            if let Some(max_dimension) = args.max_dimension {
                avatar.max_dimension = Some(max_dimension);
            }
            if args.natural_size {
                avatar.max_dimension = None;
            }
            if let Some(max_input_bytes) = args.max_input_bytes {
                avatar.max_input_bytes = max_input_bytes;
            }
            avatar.validate()?;
            let changed = avatar != config.avatar;
            config.avatar = avatar;
            Ok(changed)
        }
    }
}

pub(crate) fn config_path(arg: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path.to_path_buf());
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".causerie").join("config.json"))
}

pub(crate) fn load_config(path: &Path) -> anyhow::Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("invalid config {}: {err}", path.display()))?;
    Ok(config)
}

pub(crate) fn save_config(path: &Path, config: &CliConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
