use schemars::schema_for;

use crate::models::{Group, User};

/// JSON schema of a users snapshot (an array of users).
pub fn users_snapshot_schema() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(schema_for!(Vec<User>))
}

/// JSON schema of a single group snapshot.
pub fn group_snapshot_schema() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(schema_for!(Group))
}
