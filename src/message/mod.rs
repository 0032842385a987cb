mod segment;
pub use segment::*;

pub mod cq;

use std::fmt;

use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// Message content of a message event.
///
/// On the wire it is either an array of segments or a CQ-coded string; both
/// decode into the same segment list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Message(pub Vec<Segment>);

impl Message {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated content of every text segment.
    pub fn extract_plain_text(&self) -> String {
        self.0.iter().filter_map(Segment::as_text).collect()
    }

    /// Whether the message mentions `self_id` or replies to one of its messages.
    pub fn is_addressed_to(&self, self_id: i64) -> bool {
        self.0
            .iter()
            .any(|seg| seg.is_at(self_id) || seg.is_reply_to(self_id))
    }
}

impl From<Vec<Segment>> for Message {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self(cq::parse(s))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cq::render(&self.0))
    }
}

struct MessageVisitor;

impl<'de> Visitor<'de> for MessageVisitor {
    type Value = Message;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a CQ-coded string or an array of message segments")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Message, E> {
        Ok(Message::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Message, E> {
        Ok(Message::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Message, E> {
        Ok(Message::default())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Message, A::Error> {
        let mut segments = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(seg) = seq.next_element()? {
            segments.push(seg);
        }
        Ok(Message(segments))
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MessageVisitor)
    }
}
