use std::fs;
use std::path::Path;

use causerie_core::{Group, User};
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let contents = fs::read_to_string(path)
        .map_err(|err| anyhow::anyhow!("cannot read {what} file {}: {err}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("invalid {what} file {}: {err}", path.display()))
}

pub(crate) fn read_users_snapshot(path: &Path) -> anyhow::Result<Vec<User>> {
    let users: Vec<User> = read_json(path, "users")?;
    tracing::debug!(count = users.len(), path = %path.display(), "users snapshot loaded");
    Ok(users)
}

pub(crate) fn read_group_snapshot(path: &Path) -> anyhow::Result<Group> {
    read_json(path, "group")
}
