use causerie_avatar::AvatarOptions;
use causerie_core::Identity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Identity of the viewing user; their name gets the "(you)" marker.
    #[serde(default)]
    pub me: Option<Identity>,
    #[serde(default)]
    pub avatar: AvatarOptions,
}
