use causerie_avatar::AvatarFormat;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct AvatarArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    #[arg(long, help = "Output format: jpeg, png or webp")]
    pub format: Option<AvatarFormat>,
    #[arg(long, help = "Encoder quality, 1-100 (jpeg only)")]
    pub quality: Option<u8>,
    #[arg(long)]
    pub max_dimension: Option<u32>,
}
