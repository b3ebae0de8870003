mod actions;
pub(crate) mod args;
pub(crate) mod config;
pub(crate) mod types;

pub(crate) use actions::handle_schema_command;
pub(crate) use config::{config_path, handle_config_command, load_config, save_config};
pub(crate) use types::CliConfig;
