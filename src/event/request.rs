use serde::{Deserialize, Serialize};

use super::EventBase;

/// Someone asked to become a friend. Pass `flag` back to approve or reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FriendRequestEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub request_type: String,
    pub user_id: i64,
    pub comment: String,
    pub flag: String,
}

/// Someone asked to join a group, or the bot was invited into one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupRequestEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub request_type: String,
    /// `add` or `invite`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
    pub comment: String,
    pub flag: String,
}
