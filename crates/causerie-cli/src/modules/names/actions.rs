use causerie_core::{
    avatar_initials, group_name, user_username, users_map, Identity, User, UsersMap,
};

use crate::cli_args::{GroupNameArgs, NameArgs};
use crate::modules::shared::{read_group_snapshot, read_users_snapshot};
use crate::modules::system::CliConfig;

/// Display name for `identity`. Unknown identities are shown by their hex form.
pub(crate) fn resolve_name(
    users: &UsersMap,
    identity: Identity,
    me: Option<Identity>,
    initials: bool,
) -> String {
    let fallback;
    let user = match users.get(&identity.to_string()) {
        Some(user) => user,
        None => {
            tracing::debug!(%identity, "user not in snapshot");
            fallback = User::new(identity, None);
            &fallback
        }
    };
    if initials {
        return avatar_initials(user);
    }
    user_username(user, me == Some(identity))
}

pub(crate) fn handle_name(args: NameArgs, config: &CliConfig) -> anyhow::Result<()> {
    let users = users_map(read_users_snapshot(&args.users)?);
    let me = args.me.or(config.me);
    println!("{}", resolve_name(&users, args.identity, me, args.initials));
    Ok(())
}

pub(crate) fn handle_group_name(args: GroupNameArgs) -> anyhow::Result<()> {
    let users = users_map(read_users_snapshot(&args.users)?);
    let group = read_group_snapshot(&args.group)?;
    println!("{}", group_name(&group, &users));
    Ok(())
}
