use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::UserStatus;
use super::identity::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub identity: Identity,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Encoded avatar blob, as produced by the avatar converter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Vec<u8>>,
}

impl User {
    #[must_use]
    pub fn new(identity: Identity, username: Option<&str>) -> Self {
        Self {
            identity,
            username: username.map(str::to_string),
            status: None,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Group {
    #[serde(default)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Identity>,
    #[serde(default)]
    pub name: Option<String>,
    /// Member identities in display order. May repeat or reference unknown users.
    #[serde(default)]
    pub users: Vec<Identity>,
}

impl Group {
    #[must_use]
    pub fn new(name: Option<&str>, users: Vec<Identity>) -> Self {
        Self {
            id: 0,
            owner: None,
            name: name.map(str::to_string),
            users,
        }
    }
}
