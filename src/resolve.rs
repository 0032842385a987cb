//! Picks the event variant from the `post_type`, `<post_type>_type` and `sub_type` discriminators.

use serde_json::Value;

use crate::{
    error::{EventError, EventResult},
    event::{names, EventKind},
};

/// An entry of the resolver table. `sub_type: None` selects the variant for every
/// sub type; `Some` entries take precedence for their exact sub type.
struct Entry {
    type_name: &'static str,
    sub_type: Option<&'static str>,
    kind: EventKind,
}

const fn entry(type_name: &'static str, sub_type: Option<&'static str>, kind: EventKind) -> Entry {
    Entry {
        type_name,
        sub_type,
        kind,
    }
}

static TABLE: &[Entry] = &[
    entry(names::PRIVATE_MESSAGE, None, EventKind::PrivateMessage),
    entry(names::GROUP_MESSAGE, None, EventKind::GroupMessage),
    entry(names::GROUP_UPLOAD, None, EventKind::GroupUpload),
    entry(names::GROUP_ADMIN, None, EventKind::GroupAdmin),
    entry(names::GROUP_DECREASE, None, EventKind::GroupDecrease),
    entry(names::GROUP_INCREASE, None, EventKind::GroupIncrease),
    entry(names::GROUP_BAN, None, EventKind::GroupBan),
    entry(names::FRIEND_ADD, None, EventKind::FriendAdd),
    entry(names::GROUP_RECALL, None, EventKind::GroupRecall),
    entry(names::FRIEND_RECALL, None, EventKind::FriendRecall),
    entry(names::NOTIFY, Some("poke"), EventKind::Poke),
    entry(names::NOTIFY, Some("lucky_king"), EventKind::LuckyKing),
    entry(names::NOTIFY, Some("honor"), EventKind::Honor),
    entry(names::FRIEND_REQUEST, None, EventKind::FriendRequest),
    entry(names::GROUP_REQUEST, None, EventKind::GroupRequest),
    entry(names::LIFECYCLE, None, EventKind::Lifecycle),
    entry(names::HEARTBEAT, None, EventKind::Heartbeat),
];

/// Outcome of resolving a payload's discriminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub kind: EventKind,
    /// First two levels, e.g. `notice.notify`.
    pub type_name: String,
    /// Every level present on the wire, e.g. `notice.notify.poke`.
    pub full_name: String,
}

fn discriminator<'a>(payload: &'a Value, field: &str) -> &'a str {
    payload.get(field).and_then(Value::as_str).unwrap_or_default()
}

fn sub_type(payload: &Value) -> Option<String> {
    match payload.get("sub_type")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        v => Some(v.to_string()),
    }
}

/// Looks a two-level type name and optional sub type up in the table.
pub fn lookup(type_name: &str, sub_type: Option<&str>) -> Option<EventKind> {
    let mut fallback = None;
    for e in TABLE.iter().filter(|e| e.type_name == type_name) {
        match e.sub_type {
            Some(sub) if Some(sub) == sub_type => return Some(e.kind),
            Some(_) => {}
            None => fallback = Some(e.kind),
        }
    }
    fallback
}

/// Resolves the variant of `payload` without decoding it.
pub fn resolve(payload: &Value) -> EventResult<Resolved> {
    let post_type = discriminator(payload, "post_type");
    let next_type = discriminator(payload, &format!("{post_type}_type"));
    let type_name = format!("{post_type}.{next_type}");

    let sub_type = sub_type(payload);
    let full_name = match &sub_type {
        Some(sub) => format!("{type_name}.{sub}"),
        None => type_name.clone(),
    };

    match lookup(&type_name, sub_type.as_deref()) {
        Some(kind) => Ok(Resolved {
            kind,
            type_name,
            full_name,
        }),
        None => Err(EventError::UnresolvableType {
            event_name: full_name,
            payload: payload.clone(),
        }),
    }
}
