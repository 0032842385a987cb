use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sender profile attached to a message event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Sender {
    pub user_id: i64,
    pub nickname: String,
    /// `male`, `female` or `unknown`
    pub sex: String,
    pub age: i32,
}

/// Sender profile of a group message: the plain profile plus group membership details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupSender {
    #[serde(flatten)]
    pub profile: Sender,
    pub card: String,
    pub area: String,
    pub level: String,
    /// `owner`, `admin` or `member`
    pub role: String,
    pub title: String,
}

impl AsRef<Sender> for GroupSender {
    fn as_ref(&self) -> &Sender {
        &self.profile
    }
}

/// Anonymous sender in a group. `flag` is needed to ban the sender later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Anonymous {
    pub id: i64,
    pub name: String,
    pub flag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: i64,
    #[serde(alias = "bus_id", deserialize_with = "int_or_numeric_string")]
    pub busid: i64,
}

/// Some implementations quote numeric ids; an empty string reads as zero.
fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) if s.trim().is_empty() => Ok(0),
        IntOrString::Str(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeartbeatStatus {
    pub online: bool,
    pub good: bool,
}

/// Response to an action, delivered on the same connection as events.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActionResp {
    pub status: String,
    pub retcode: i32,
    pub msg: Option<String>,
    pub wording: Option<String>,
    #[serde(default)]
    pub data: Value,
    pub echo: Option<Value>,
}

impl ActionResp {
    pub fn is_ok(&self) -> bool {
        self.retcode == 0
    }
}
