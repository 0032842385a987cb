pub mod config;
pub mod decode;
pub mod describe;
pub mod enrich;
pub mod error;
pub mod event;
pub mod message;
pub mod resolve;
pub mod structs;

pub use config::DecoderConfig;
pub use decode::{from_slice, from_str, from_value, Decoder, Frame};
pub use error::{EventError, EventResult};
pub use event::{Event, EventKind, EventT, MessageEventT};

/// Tracing target of everything this crate logs.
pub const ONEBOT: &str = "OneBot";
