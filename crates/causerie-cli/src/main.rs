use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::system::{config_path, handle_config_command, load_config, save_config};

pub(crate) const CONFIG_ENV: &str = "CAUSERIE_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let path = config_path(cli.config.as_deref())?;
    let mut config = load_config(&path)?;

    match cli.command {
        Command::Config(args) => {
            if handle_config_command(args, &mut config)? {
                save_config(&path, &config)?;
                tracing::info!(path = %path.display(), "config saved");
            }
        }
        command => handle_command(command, &config).await?,
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests;
