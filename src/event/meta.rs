use serde::{Deserialize, Serialize};

use super::EventBase;
use crate::structs::HeartbeatStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifecycleMetaEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub meta_event_type: String,
    /// `enable`, `disable` or `connect`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeartbeatMetaEvent {
    #[serde(flatten)]
    pub base: EventBase,
    pub meta_event_type: String,
    pub status: HeartbeatStatus,
    /// milliseconds
    pub interval: i64,
}
