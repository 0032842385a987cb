use serde::{Deserialize, Serialize};

use super::{EventBase, EventT, HasBase, MessageEventT};
use crate::{
    describe::{preview, PREVIEW_CHARS},
    message::Message,
    structs::{Anonymous, GroupSender, Sender},
};

/// Fields shared by private and group messages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageEvent {
    #[serde(flatten)]
    pub base: EventBase,
    /// `private` or `group`
    pub message_type: String,
    /// `friend`, `group`, `other` for private messages; `normal`, `anonymous`, `notice` for group messages
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_type: String,
    pub message_id: i32,
    pub user_id: i64,
    pub message: Message,
    pub raw_message: String,
    pub font: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrivateMessageEvent {
    #[serde(flatten)]
    pub inner: MessageEvent,
    pub sender: Option<Sender>,
}

impl PrivateMessageEvent {
    pub fn describe(&self, preview_chars: usize) -> String {
        format!(
            "[private message](#{} from {}): {}",
            self.inner.message_id,
            self.inner.user_id,
            preview(&self.inner.message.to_string(), preview_chars)
        )
    }
}

impl EventT for PrivateMessageEvent {
    fn base(&self) -> &EventBase {
        &self.inner.base
    }

    fn description(&self) -> String {
        self.describe(PREVIEW_CHARS)
    }
}

impl HasBase for PrivateMessageEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.inner.base
    }
}

impl MessageEventT for PrivateMessageEvent {
    fn message_event(&self) -> &MessageEvent {
        &self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupMessageEvent {
    #[serde(flatten)]
    pub inner: MessageEvent,
    pub group_id: i64,
    pub sender: Option<GroupSender>,
    pub anonymous: Option<Anonymous>,
}

impl GroupMessageEvent {
    pub fn describe(&self, preview_chars: usize) -> String {
        format!(
            "[group message](#{} from {}@{}): {}",
            self.inner.message_id,
            self.inner.user_id,
            self.group_id,
            preview(&self.inner.message.to_string(), preview_chars)
        )
    }
}

impl EventT for GroupMessageEvent {
    fn base(&self) -> &EventBase {
        &self.inner.base
    }

    fn description(&self) -> String {
        self.describe(PREVIEW_CHARS)
    }
}

impl HasBase for GroupMessageEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.inner.base
    }
}

impl MessageEventT for GroupMessageEvent {
    fn message_event(&self) -> &MessageEvent {
        &self.inner
    }

    fn session_id(&self) -> String {
        format!("{}@{}", self.inner.user_id, self.group_id)
    }
}
