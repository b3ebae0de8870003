use crate::cli_args::*;
use crate::modules::avatar::actions::avatar_options;
use crate::modules::names::actions::resolve_name;
use crate::modules::system::{handle_config_command, load_config, save_config, CliConfig};
use causerie_avatar::{AvatarFormat, DEFAULT_QUALITY};
use causerie_core::{users_map, Identity, User};
use std::path::PathBuf;

fn set_avatar(args: SetAvatarArgs, config: &mut CliConfig) -> anyhow::Result<bool> {
    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::SetAvatar(args),
        },
        config,
    )
}

fn empty_set_avatar() -> SetAvatarArgs {
    SetAvatarArgs {
        format: None,
        quality: None,
        max_dimension: None,
        natural_size: false,
        max_input_bytes: None,
    }
}

#[test]
fn config_commands_manage_identity_and_avatar() {
    let mut config = CliConfig::default();
    let me = Identity::from_u128(7);

    let changed = handle_config_command(
        ConfigArgs {
            command: ConfigCommand::SetMe(SetMeArgs { identity: me }),
        },
        &mut config,
    )
    .expect("set-me");
    assert!(changed);
    assert_eq!(config.me, Some(me));

    let changed = set_avatar(
        SetAvatarArgs {
            format: Some(AvatarFormat::Png),
            quality: Some(75),
            max_dimension: Some(256),
            ..empty_set_avatar()
        },
        &mut config,
    )
    .expect("set-avatar");
    assert!(changed);
    assert_eq!(config.avatar.format, AvatarFormat::Png);
    assert_eq!(config.avatar.quality, 75);
    assert_eq!(config.avatar.max_dimension, Some(256));

    let changed = set_avatar(
        SetAvatarArgs {
            natural_size: true,
            ..empty_set_avatar()
        },
        &mut config,
    )
    .expect("natural size");
    assert!(changed);
    assert_eq!(config.avatar.max_dimension, None);

    let changed = set_avatar(empty_set_avatar(), &mut config).expect("no-op");
    assert!(!changed);

    let changed = handle_config_command(
        ConfigArgs {
            command: ConfigCommand::Show,
        },
        &mut config,
    )
    .expect("show");
    assert!(!changed);

    let changed = handle_config_command(
        ConfigArgs {
            command: ConfigCommand::ClearMe,
        },
        &mut config,
    )
    .expect("clear-me");
    assert!(changed);
    assert!(config.me.is_none());
}

#[test]
fn set_avatar_rejects_invalid_quality() {
    let mut config = CliConfig::default();
    let err = set_avatar(
        SetAvatarArgs {
            quality: Some(0),
            ..empty_set_avatar()
        },
        &mut config,
    )
    .expect_err("invalid quality");
    assert!(err.to_string().contains("quality"));
    assert_eq!(config.avatar.quality, DEFAULT_QUALITY);
}

#[test]
fn config_file_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.json");

    let missing = load_config(&path).expect("load missing");
    assert_eq!(missing, CliConfig::default());

    let mut config = CliConfig::default();
    config.me = Some(Identity::from_u128(42));
    config.avatar.quality = 60;
    save_config(&path, &config).expect("save");

    let loaded = load_config(&path).expect("load");
    assert_eq!(loaded, config);
}

#[test]
fn partial_config_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"avatar":{"format":"webp"}}"#).expect("write");

    let config = load_config(&path).expect("load");
    assert!(config.me.is_none());
    assert_eq!(config.avatar.format, AvatarFormat::WebP);
    assert_eq!(config.avatar.quality, DEFAULT_QUALITY);
}

#[test]
fn avatar_flags_override_config() {
    let mut config = CliConfig::default();
    config.avatar.format = AvatarFormat::Png;
    config.avatar.max_dimension = Some(64);

    let args = AvatarArgs {
        input: PathBuf::from("in.png"),
        output: PathBuf::from("out.jpg"),
        format: Some(AvatarFormat::Jpeg),
        quality: Some(80),
        max_dimension: None,
    };
    let options = avatar_options(&args, &config);
    assert_eq!(options.format, AvatarFormat::Jpeg);
    assert_eq!(options.quality, 80);
    assert_eq!(options.max_dimension, Some(64));
}

#[test]
fn resolve_name_marks_me_and_handles_unknown_users() {
    let alice = User::new(Identity::from_u128(0xa1), Some("alice"));
    let users = users_map(vec![alice.clone()]);

    assert_eq!(resolve_name(&users, alice.identity, None, false), "alice");
    assert_eq!(
        resolve_name(&users, alice.identity, Some(alice.identity), false),
        "alice (you)"
    );
    assert_eq!(resolve_name(&users, alice.identity, None, true), "A");

    let stranger = Identity::from_u128(0xdead);
    assert_eq!(
        resolve_name(&users, stranger, Some(stranger), false),
        format!("{stranger} (you)")
    );
}
