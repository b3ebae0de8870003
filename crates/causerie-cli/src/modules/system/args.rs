use causerie_avatar::AvatarFormat;
use causerie_core::Identity;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Show,
    SetMe(SetMeArgs),
    ClearMe,
    SetAvatar(SetAvatarArgs),
}

#[derive(Args)]
pub struct SetMeArgs {
    pub identity: Identity,
}

#[derive(Args)]
pub struct SetAvatarArgs {
    #[arg(long)]
    pub format: Option<AvatarFormat>,
    #[arg(long)]
    pub quality: Option<u8>,
    #[arg(long)]
    pub max_dimension: Option<u32>,
    #[arg(long, conflicts_with = "max_dimension")]
    pub natural_size: bool,
    #[arg(long)]
    pub max_input_bytes: Option<usize>,
}

#[derive(Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaKind {
    Users,
    Group,
}
