use causerie_core::Identity;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct NameArgs {
    #[arg(long, help = "Users snapshot (JSON array)")]
    pub users: PathBuf,
    pub identity: Identity,
    #[arg(long, help = "Viewing user; overrides the configured identity")]
    pub me: Option<Identity>,
    #[arg(long, help = "Print avatar initials instead of the name")]
    pub initials: bool,
}

#[derive(Args)]
pub struct GroupNameArgs {
    #[arg(long, help = "Users snapshot (JSON array)")]
    pub users: PathBuf,
    #[arg(long, help = "Group snapshot (JSON object)")]
    pub group: PathBuf,
}
