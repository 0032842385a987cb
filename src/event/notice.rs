use serde::{Deserialize, Serialize};

use super::EventBase;
use crate::structs::UploadedFile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoticeEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub notice_type: String,
}

/// A file was uploaded to a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupUploadNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    pub group_id: i64,
    pub user_id: i64,
    pub file: UploadedFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupAdminNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    /// `set` or `unset`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupIncreaseNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    /// `approve` or `invite`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
    pub operator_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupDecreaseNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    /// `leave`, `kick` or `kick_me`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
    pub operator_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupBanNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    /// `ban` or `lift_ban`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
    pub operator_id: i64,
    /// seconds
    pub duration: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FriendAddNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupRecallNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    pub group_id: i64,
    pub user_id: i64,
    pub operator_id: i64,
    pub message_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FriendRecallNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    pub user_id: i64,
    pub message_id: i64,
}

/// `group_id` is zero for a poke between friends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PokeNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
    pub target_id: i64,
}

/// Lucky king of a red packet: `user_id` sent it, `target_id` won it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LuckyKingNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
    pub target_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HonorNoticeEvent {
    #[serde(flatten)]
    pub notice: NoticeEvent,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub group_id: i64,
    pub user_id: i64,
    /// `talkative`, `performer` or `emotion`
    pub honor_type: String,
}
