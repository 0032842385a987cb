use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One OneBot v11 message segment, e.g. `{"type": "at", "data": {"qq": "10001"}}`.
///
/// `data` is kept as-is so that segment kinds this crate knows nothing about
/// survive decoding untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Segment {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Segment {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            data: Map::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn text(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::new("text").with("text", text)
    }

    pub fn at(qq: i64) -> Self {
        Self::new("at").with("qq", qq.to_string())
    }

    pub fn reply(id: i64) -> Self {
        Self::new("reply").with("id", id.to_string())
    }

    pub fn is_text(&self) -> bool {
        self.ty == "text"
    }

    /// Text content of a `text` segment.
    pub fn as_text(&self) -> Option<&str> {
        if self.is_text() {
            self.data.get("text").and_then(Value::as_str)
        } else {
            None
        }
    }

    /// Reads a data field as a string, accepting numbers as well since
    /// implementations disagree on whether ids are quoted.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Whether this segment is an `at` targeting `user_id`. `qq=all` is not a mention of anyone in particular.
    pub fn is_at(&self, user_id: i64) -> bool {
        self.ty == "at" && self.qq_is(user_id)
    }

    fn qq_is(&self, user_id: i64) -> bool {
        match self.data.get("qq") {
            Some(Value::Number(n)) => n.as_i64() == Some(user_id),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok() == Some(user_id),
            _ => false,
        }
    }

    /// Whether this segment is a `reply` quoting a message sent by `user_id`.
    ///
    /// Only implementations that attach `qq` to reply segments can be detected here;
    /// the rest insert an `at` alongside the reply, which [`Segment::is_at`] covers.
    pub fn is_reply_to(&self, user_id: i64) -> bool {
        self.ty == "reply" && self.qq_is(user_id)
    }
}
