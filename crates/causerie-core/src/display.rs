use std::collections::HashMap;

use crate::constants::{GROUP_MEMBER_SEPARATOR, SELF_SUFFIX};
use crate::models::{Group, User};

/// Identity text form → user, rebuilt for each formatting pass.
pub type UsersMap = HashMap<String, User>;

/// Builds the lookup table used by [`group_name`]. A later user with the
/// same identity replaces an earlier one.
pub fn users_map<I>(users: I) -> UsersMap
where
    I: IntoIterator<Item = User>,
{
    users
        .into_iter()
        .map(|user| (user.identity.to_string(), user))
        .collect()
}

/// Username when set and non-empty, otherwise the identity's text form.
#[must_use]
pub fn display_name(user: &User) -> String {
    user.username
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| user.identity.to_string())
}

#[must_use]
pub fn user_username(user: &User, me: bool) -> String {
    let mut name = display_name(user);
    if me {
        name.push_str(SELF_SUFFIX);
    }
    name
}

/// The group's own name, or its known members' display names joined in
/// member order. Members missing from `users` are skipped.
#[must_use]
pub fn group_name(group: &Group, users: &UsersMap) -> String {
    if let Some(name) = group.name.as_deref().filter(|value| !value.is_empty()) {
        return name.to_string();
    }

    let mut names = Vec::with_capacity(group.users.len());
    for identity in &group.users {
        match users.get(&identity.to_string()) {
            Some(user) => names.push(display_name(user)),
            None => {
                tracing::debug!(%identity, group_id = group.id, "group member not in users map");
            }
        }
    }
    names.join(GROUP_MEMBER_SEPARATOR)
}

/// Up to two upper-cased initials for an avatar placeholder.
#[must_use]
pub fn avatar_initials(user: &User) -> String {
    if let Some(name) = user
        .username
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        let mut initials = String::new();
        for part in name.split_whitespace() {
            if let Some(ch) = part.chars().next() {
                initials.push(ch);
            }
            if initials.chars().count() >= 2 {
                break;
            }
        }
        if !initials.is_empty() {
            return initials.to_uppercase();
        }
    }

    let mut initials: String = user
        .identity
        .to_hex()
        .chars()
        .skip_while(|ch| *ch == '0')
        .take(2)
        .collect();
    if initials.is_empty() {
        initials.push('U');
    }
    initials.to_uppercase()
}
