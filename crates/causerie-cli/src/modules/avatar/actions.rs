use causerie_avatar::{convert_avatar_file, AvatarOptions};

use crate::cli_args::AvatarArgs;
use crate::modules::system::CliConfig;

pub(crate) fn avatar_options(args: &AvatarArgs, config: &CliConfig) -> AvatarOptions {
    let mut options = config.avatar.clone();
    if let Some(format) = args.format {
        options.format = format;
    }
    if let Some(quality) = args.quality {
        options.quality = quality;
    }
    if let Some(max_dimension) = args.max_dimension {
        options.max_dimension = Some(max_dimension);
    }
    options
}

pub(crate) async fn handle_avatar(args: AvatarArgs, config: &CliConfig) -> anyhow::Result<()> {
    let options = avatar_options(&args, config);
    let Some(avatar) = convert_avatar_file(Some(&args.input), &options).await? else {
        anyhow::bail!("no avatar produced for {}", args.input.display());
    };
    tokio::fs::write(&args.output, &avatar.bytes).await?;
    tracing::info!(
        output = %args.output.display(),
        mime = avatar.mime_type(),
        "avatar written"
    );
    println!(
        "{} {}x{} {} bytes",
        avatar.format,
        avatar.width,
        avatar.height,
        avatar.len()
    );
    Ok(())
}
