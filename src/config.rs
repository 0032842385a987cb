use serde::{Deserialize, Serialize};

use crate::describe::PREVIEW_CHARS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Characters kept at each end of a message when describing it in logs.
    pub preview_chars: usize,
    /// Include the rejected payload in failure diagnostics.
    pub log_rejected_payloads: bool,
    /// Log heartbeats at debug level instead of trace.
    pub log_heartbeats: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            preview_chars: PREVIEW_CHARS,
            log_rejected_payloads: true,
            log_heartbeats: false,
        }
    }
}
