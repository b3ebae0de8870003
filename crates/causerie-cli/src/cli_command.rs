use crate::cli_args::*;
use crate::modules::avatar::handle_avatar;
use crate::modules::names::{handle_group_name, handle_name};
use crate::modules::system::{handle_schema_command, CliConfig};

pub(crate) async fn handle_command(command: Command, config: &CliConfig) -> anyhow::Result<()> {
    match command {
        Command::Avatar(args) => handle_avatar(args, config).await?,
        Command::Name(args) => handle_name(args, config)?,
        Command::GroupName(args) => handle_group_name(args)?,
        Command::Schema(args) => handle_schema_command(args)?,
        Command::Config(_) => {
            unreachable!()
        }
    }
    Ok(())
}
