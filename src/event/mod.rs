//! The closed set of OneBot v11 events.
//!
//! ```text
//! Event
//! ├── message.private          PrivateMessageEvent
//! ├── message.group            GroupMessageEvent
//! ├── notice.group_upload      GroupUploadNoticeEvent
//! ├── notice.group_admin       GroupAdminNoticeEvent
//! ├── notice.group_increase    GroupIncreaseNoticeEvent
//! ├── notice.group_decrease    GroupDecreaseNoticeEvent
//! ├── notice.group_ban         GroupBanNoticeEvent
//! ├── notice.friend_add        FriendAddNoticeEvent
//! ├── notice.group_recall      GroupRecallNoticeEvent
//! ├── notice.friend_recall     FriendRecallNoticeEvent
//! ├── notice.notify.poke       PokeNoticeEvent
//! ├── notice.notify.lucky_king LuckyKingNoticeEvent
//! ├── notice.notify.honor      HonorNoticeEvent
//! ├── request.friend           FriendRequestEvent
//! ├── request.group            GroupRequestEvent
//! ├── meta_event.lifecycle     LifecycleMetaEvent
//! └── meta_event.heartbeat     HeartbeatMetaEvent
//! ```

mod message;
mod meta;
pub mod names;
mod notice;
mod request;

pub use message::*;
pub use meta::*;
pub use notice::*;
pub use request::*;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::message::Message;

/// Fields shared by every event.
///
/// `event_name` and `to_me` never come from the wire; they are filled in once by
/// the enricher and are read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventBase {
    pub time: i64,
    pub self_id: i64,
    /// `message`, `notice`, `request` or `meta_event`
    pub post_type: String,
    #[serde(skip)]
    pub(crate) event_name: String,
    #[serde(skip)]
    pub(crate) to_me: bool,
}

impl EventBase {
    /// Dotted event name such as `notice.notify.poke`.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn to_me(&self) -> bool {
        self.to_me
    }
}

/// Capabilities every event has.
pub trait EventT: fmt::Debug {
    fn base(&self) -> &EventBase;

    fn time(&self) -> i64 {
        self.base().time
    }

    fn self_id(&self) -> i64 {
        self.base().self_id
    }

    fn post_type(&self) -> &str {
        &self.base().post_type
    }

    fn event_name(&self) -> &str {
        self.base().event_name()
    }

    /// Single-line human-readable form for logs.
    fn description(&self) -> String {
        format!("[{}]: {:?}", self.event_name(), self)
    }

    fn is_message_event(&self) -> bool {
        self.post_type() == names::POST_TYPE_MESSAGE
    }

    fn is_to_me(&self) -> bool {
        self.base().to_me()
    }

    /// Matches the event name against a dotted prefix, one whole segment at a time:
    /// `notice.notify` matches `notice.notify.poke` but `notice.no` does not.
    fn matches(&self, prefix: &str) -> bool {
        let name = self.event_name();
        match name.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('.') || prefix.is_empty(),
            None => false,
        }
    }
}

/// Capabilities of message events on top of [`EventT`].
pub trait MessageEventT: EventT {
    fn message_event(&self) -> &MessageEvent;

    /// `private` or `group`
    fn message_type(&self) -> &str {
        &self.message_event().message_type
    }

    /// Key of the conversation this message belongs to, for per-conversation state.
    fn session_id(&self) -> String {
        self.message_event().user_id.to_string()
    }

    fn message(&self) -> &Message {
        &self.message_event().message
    }

    fn extract_plain_text(&self) -> String {
        self.message().extract_plain_text()
    }
}

/// Mutable access to the base, for the enricher only.
pub(crate) trait HasBase {
    fn base_mut(&mut self) -> &mut EventBase;
}

macro_rules! impl_event_t {
    ($($t:ty => $($field:ident).+;)+) => {
        $(
        impl EventT for $t {
            fn base(&self) -> &EventBase {
                &self.$($field).+
            }
        }

        impl HasBase for $t {
            fn base_mut(&mut self) -> &mut EventBase {
                &mut self.$($field).+
            }
        }
        )+
    };
}

macro_rules! events {
    ($($variant:ident($t:ty) => $name:expr,)+) => {
        /// A decoded event.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Event {
            $($variant($t),)+
        }

        /// Tag of an [`Event`] variant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventKind {
            $($variant,)+
        }

        impl EventKind {
            pub const ALL: &'static [EventKind] = &[$(EventKind::$variant,)+];

            /// Canonical name of the variant, without sub types that do not select it.
            pub fn name(self) -> &'static str {
                match self {
                    $(EventKind::$variant => $name,)+
                }
            }
        }

        impl Event {
            pub fn kind(&self) -> EventKind {
                match self {
                    $(Event::$variant(_) => EventKind::$variant,)+
                }
            }

            pub fn as_event(&self) -> &dyn EventT {
                match self {
                    $(Event::$variant(e) => e,)+
                }
            }

            pub(crate) fn base_mut(&mut self) -> &mut EventBase {
                match self {
                    $(Event::$variant(e) => e.base_mut(),)+
                }
            }
        }

        $(
        impl From<$t> for Event {
            fn from(e: $t) -> Self {
                Event::$variant(e)
            }
        }
        )+
    };
}

events! {
    PrivateMessage(PrivateMessageEvent) => names::PRIVATE_MESSAGE,
    GroupMessage(GroupMessageEvent) => names::GROUP_MESSAGE,
    GroupUpload(GroupUploadNoticeEvent) => names::GROUP_UPLOAD,
    GroupAdmin(GroupAdminNoticeEvent) => names::GROUP_ADMIN,
    GroupIncrease(GroupIncreaseNoticeEvent) => names::GROUP_INCREASE,
    GroupDecrease(GroupDecreaseNoticeEvent) => names::GROUP_DECREASE,
    GroupBan(GroupBanNoticeEvent) => names::GROUP_BAN,
    FriendAdd(FriendAddNoticeEvent) => names::FRIEND_ADD,
    GroupRecall(GroupRecallNoticeEvent) => names::GROUP_RECALL,
    FriendRecall(FriendRecallNoticeEvent) => names::FRIEND_RECALL,
    Poke(PokeNoticeEvent) => names::NOTIFY_POKE,
    LuckyKing(LuckyKingNoticeEvent) => names::NOTIFY_LUCKY_KING,
    Honor(HonorNoticeEvent) => names::NOTIFY_HONOR,
    FriendRequest(FriendRequestEvent) => names::FRIEND_REQUEST,
    GroupRequest(GroupRequestEvent) => names::GROUP_REQUEST,
    Lifecycle(LifecycleMetaEvent) => names::LIFECYCLE,
    Heartbeat(HeartbeatMetaEvent) => names::HEARTBEAT,
}

impl_event_t! {
    GroupUploadNoticeEvent => notice.base;
    GroupAdminNoticeEvent => notice.base;
    GroupIncreaseNoticeEvent => notice.base;
    GroupDecreaseNoticeEvent => notice.base;
    GroupBanNoticeEvent => notice.base;
    FriendAddNoticeEvent => notice.base;
    GroupRecallNoticeEvent => notice.base;
    FriendRecallNoticeEvent => notice.base;
    PokeNoticeEvent => notice.base;
    LuckyKingNoticeEvent => notice.base;
    HonorNoticeEvent => notice.base;
    FriendRequestEvent => base;
    GroupRequestEvent => base;
    LifecycleMetaEvent => base;
    HeartbeatMetaEvent => base;
}

impl Event {
    pub fn as_message_event(&self) -> Option<&dyn MessageEventT> {
        match self {
            Event::PrivateMessage(e) => Some(e),
            Event::GroupMessage(e) => Some(e),
            _ => None,
        }
    }

    /// Like [`EventT::description`], keeping `preview_chars` at each end of long messages.
    pub fn description_with(&self, preview_chars: usize) -> String {
        match self {
            Event::PrivateMessage(e) => e.describe(preview_chars),
            Event::GroupMessage(e) => e.describe(preview_chars),
            e => e.as_event().description(),
        }
    }
}

impl EventT for Event {
    fn base(&self) -> &EventBase {
        self.as_event().base()
    }

    fn description(&self) -> String {
        self.as_event().description()
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        crate::from_value(value).map_err(serde::de::Error::custom)
    }
}
