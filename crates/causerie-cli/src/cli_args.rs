use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub use crate::modules::avatar::args::*;
pub use crate::modules::names::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "causerie")]
#[command(about = "Causerie chat helpers")]
pub struct Cli {
    #[arg(long, env = crate::CONFIG_ENV, help = "Config file (default ~/.causerie/config.json)")]
    pub config: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Convert an image into an avatar blob")]
    Avatar(AvatarArgs),
    #[command(about = "Print a user's display name")]
    Name(NameArgs),
    #[command(about = "Print a group's display name")]
    GroupName(GroupNameArgs),
    #[command(about = "Print the JSON schema of a snapshot file")]
    Schema(SchemaArgs),
    Config(ConfigArgs),
}
