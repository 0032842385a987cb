use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("unresolvable event type \"{event_name}\"")]
    UnresolvableType { event_name: String, payload: Value },
    #[error("malformed \"{event_name}\" payload: {source}")]
    MalformedPayload {
        event_name: String,
        #[source]
        source: serde_json::Error,
        payload: Value,
    },
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl EventError {
    /// The payload that was rejected, if it got far enough to be parsed.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            EventError::UnresolvableType { payload, .. }
            | EventError::MalformedPayload { payload, .. } => Some(payload),
            EventError::InvalidJson(_) => None,
        }
    }

    /// Full dotted name of the rejected event, every wire level included.
    pub fn event_name(&self) -> Option<&str> {
        match self {
            EventError::UnresolvableType { event_name, .. }
            | EventError::MalformedPayload { event_name, .. } => Some(event_name),
            EventError::InvalidJson(_) => None,
        }
    }
}

pub type EventResult<T> = Result<T, EventError>;
