use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{debug, error, trace};

use crate::{
    config::DecoderConfig,
    enrich::enrich,
    error::{EventError, EventResult},
    event::*,
    resolve::{resolve, Resolved},
    structs::ActionResp,
    ONEBOT,
};

fn typed<T>(resolved: &Resolved, payload: &Value) -> EventResult<Event>
where
    T: DeserializeOwned + Into<Event>,
{
    T::deserialize(payload)
        .map(Into::into)
        .map_err(|source| EventError::MalformedPayload {
            event_name: resolved.full_name.clone(),
            source,
            payload: payload.clone(),
        })
}

/// Materializes the resolved variant from `payload`. The result is not enriched yet.
pub fn decode(resolved: &Resolved, payload: &Value) -> EventResult<Event> {
    match resolved.kind {
        EventKind::PrivateMessage => typed::<PrivateMessageEvent>(resolved, payload),
        EventKind::GroupMessage => typed::<GroupMessageEvent>(resolved, payload),
        EventKind::GroupUpload => typed::<GroupUploadNoticeEvent>(resolved, payload),
        EventKind::GroupAdmin => typed::<GroupAdminNoticeEvent>(resolved, payload),
        EventKind::GroupIncrease => typed::<GroupIncreaseNoticeEvent>(resolved, payload),
        EventKind::GroupDecrease => typed::<GroupDecreaseNoticeEvent>(resolved, payload),
        EventKind::GroupBan => typed::<GroupBanNoticeEvent>(resolved, payload),
        EventKind::FriendAdd => typed::<FriendAddNoticeEvent>(resolved, payload),
        EventKind::GroupRecall => typed::<GroupRecallNoticeEvent>(resolved, payload),
        EventKind::FriendRecall => typed::<FriendRecallNoticeEvent>(resolved, payload),
        EventKind::Poke => typed::<PokeNoticeEvent>(resolved, payload),
        EventKind::LuckyKing => typed::<LuckyKingNoticeEvent>(resolved, payload),
        EventKind::Honor => typed::<HonorNoticeEvent>(resolved, payload),
        EventKind::FriendRequest => typed::<FriendRequestEvent>(resolved, payload),
        EventKind::GroupRequest => typed::<GroupRequestEvent>(resolved, payload),
        EventKind::Lifecycle => typed::<LifecycleMetaEvent>(resolved, payload),
        EventKind::Heartbeat => typed::<HeartbeatMetaEvent>(resolved, payload),
    }
}

/// Resolves, decodes and enriches one event payload.
pub fn from_value(payload: Value) -> EventResult<Event> {
    let resolved = resolve(&payload)?;
    let event = decode(&resolved, &payload)?;
    Ok(enrich(event, resolved.full_name))
}

pub fn from_str(s: &str) -> EventResult<Event> {
    from_value(serde_json::from_str(s)?)
}

pub fn from_slice(v: &[u8]) -> EventResult<Event> {
    from_value(serde_json::from_slice(v)?)
}

/// One inbound text frame of a OneBot connection.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Event(Event),
    ActionResp(ActionResp),
}

impl Frame {
    pub fn from_value(value: Value) -> EventResult<Self> {
        if value.get("post_type").is_none() && value.get("retcode").is_some() {
            return ActionResp::deserialize(&value)
                .map(Frame::ActionResp)
                .map_err(|source| EventError::MalformedPayload {
                    event_name: "action_resp".to_string(),
                    source,
                    payload: value.clone(),
                });
        }
        from_value(value).map(Frame::Event)
    }

    pub fn from_str(s: &str) -> EventResult<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }
}

/// Decodes frames for a transport loop.
///
/// Failures are reported as diagnostics and swallowed, so one bad payload never
/// stops the stream.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode(&self, text: &str) -> Option<Frame> {
        trace!(target: ONEBOT, "receive frame: {text}");
        match Frame::from_str(text) {
            Ok(frame) => {
                self.log(&frame);
                Some(frame)
            }
            Err(e) => {
                self.report(&e, text);
                None
            }
        }
    }

    /// Like [`Decoder::decode`], dropping action responses.
    pub fn decode_event(&self, text: &str) -> Option<Event> {
        match self.decode(text)? {
            Frame::Event(event) => Some(event),
            Frame::ActionResp(_) => None,
        }
    }

    fn log(&self, frame: &Frame) {
        match frame {
            Frame::Event(event @ Event::Heartbeat(_)) if !self.config.log_heartbeats => {
                trace!(target: ONEBOT, "receive event: {}", event.description());
            }
            Frame::Event(event) => {
                debug!(
                    target: ONEBOT,
                    "receive event: {}",
                    event.description_with(self.config.preview_chars)
                );
            }
            Frame::ActionResp(resp) => {
                debug!(target: ONEBOT, retcode = resp.retcode, echo = ?resp.echo, "receive action response");
            }
        }
    }

    fn report(&self, e: &EventError, text: &str) {
        if self.config.log_rejected_payloads {
            error!(target: ONEBOT, payload = %text, "failed to decode event: {e}");
        } else {
            error!(target: ONEBOT, "failed to decode event: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{from_str, from_value, Decoder, Frame};
    use crate::{
        config::DecoderConfig,
        error::EventError,
        event::{Event, EventKind, EventT},
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_private_message() {
        let ev = from_str(
            r#"{"post_type":"message","message_type":"private","time":100,"self_id":1,"user_id":2,"message_id":5,"message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(ev.kind(), EventKind::PrivateMessage);
        assert_eq!(ev.event_name(), "message.private");
        assert_eq!(ev.time(), 100);
        assert!(ev.is_to_me());
        assert!(ev.is_message_event());
        let msg = ev.as_message_event().unwrap();
        assert_eq!(msg.session_id(), "2");
        assert_eq!(msg.message_event().message_id, 5);
        assert_eq!(ev.description(), "[private message](#5 from 2): hi");
    }

    #[test]
    fn test_poke() {
        let ev = from_value(json!({
            "post_type": "notice",
            "notice_type": "notify",
            "sub_type": "poke",
            "group_id": 10,
            "user_id": 2,
            "target_id": 1,
            "self_id": 1,
        }))
        .unwrap();
        let Event::Poke(poke) = &ev else {
            panic!("expected a poke, got {ev:?}");
        };
        assert_eq!(ev.event_name(), "notice.notify.poke");
        assert!(ev.is_to_me());
        assert!(!ev.is_message_event());
        assert!(ev.as_message_event().is_none());
        assert_eq!(poke.notice.notice_type, "notify");
        assert_eq!(poke.group_id, 10);
        assert!(ev.description().starts_with("[notice.notify.poke]: "));
    }

    #[test]
    fn test_every_kind() {
        let cases = [
            (json!({"post_type": "message", "message_type": "private", "sub_type": "friend"}), "message.private.friend"),
            (json!({"post_type": "message", "message_type": "group", "sub_type": "normal", "group_id": 1}), "message.group.normal"),
            (json!({"post_type": "notice", "notice_type": "group_upload", "file": {"id": "x", "name": "a.txt", "size": 3, "busid": 102}}), "notice.group_upload"),
            (json!({"post_type": "notice", "notice_type": "group_admin", "sub_type": "set"}), "notice.group_admin.set"),
            (json!({"post_type": "notice", "notice_type": "group_increase", "sub_type": "invite"}), "notice.group_increase.invite"),
            (json!({"post_type": "notice", "notice_type": "group_decrease", "sub_type": "leave"}), "notice.group_decrease.leave"),
            (json!({"post_type": "notice", "notice_type": "group_ban", "sub_type": "ban", "duration": 60}), "notice.group_ban.ban"),
            (json!({"post_type": "notice", "notice_type": "friend_add"}), "notice.friend_add"),
            (json!({"post_type": "notice", "notice_type": "group_recall", "message_id": 9}), "notice.group_recall"),
            (json!({"post_type": "notice", "notice_type": "friend_recall", "message_id": 9}), "notice.friend_recall"),
            (json!({"post_type": "notice", "notice_type": "notify", "sub_type": "poke"}), "notice.notify.poke"),
            (json!({"post_type": "notice", "notice_type": "notify", "sub_type": "lucky_king"}), "notice.notify.lucky_king"),
            (json!({"post_type": "notice", "notice_type": "notify", "sub_type": "honor", "honor_type": "talkative"}), "notice.notify.honor"),
            (json!({"post_type": "request", "request_type": "friend", "flag": "abc"}), "request.friend"),
            (json!({"post_type": "request", "request_type": "group", "sub_type": "add", "flag": "abc"}), "request.group.add"),
            (json!({"post_type": "meta_event", "meta_event_type": "lifecycle", "sub_type": "connect"}), "meta_event.lifecycle.connect"),
            (json!({"post_type": "meta_event", "meta_event_type": "heartbeat", "status": {"online": true, "good": true}, "interval": 5000}), "meta_event.heartbeat"),
        ];
        let mut seen = Vec::new();
        for (payload, name) in cases {
            let post_type = payload["post_type"].as_str().unwrap().to_string();
            let ev = from_value(payload).unwrap();
            assert_eq!(ev.event_name(), name);
            assert_eq!(ev.event_name().split('.').next(), Some(post_type.as_str()));
            assert_eq!(ev.post_type(), post_type);
            seen.push(ev.kind());
        }
        assert_eq!(seen, EventKind::ALL);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let payload = json!({
            "post_type": "message",
            "message_type": "group",
            "self_id": 1,
            "group_id": 10,
            "user_id": 2,
            "message": [{"type": "at", "data": {"qq": 1}}, {"type": "text", "data": {"text": " hi"}}],
            "sender": {"user_id": 2, "nickname": "n", "card": "c"},
            "extra_field": {"ignored": true},
        });
        let a = from_value(payload.clone()).unwrap();
        let b = from_value(payload).unwrap();
        assert_eq!(a, b);
        assert!(a.is_to_me());
    }

    #[test]
    fn test_serialize_round_trip() {
        let cases = [
            json!({"post_type": "message", "message_type": "private", "time": 100, "self_id": 1, "user_id": 2, "message_id": 5, "message": "hi"}),
            json!({"post_type": "message", "message_type": "private", "sub_type": "friend", "user_id": 2, "message": "hi"}),
            json!({"post_type": "notice", "notice_type": "group_recall", "group_id": 10, "user_id": 2, "message_id": 9}),
            json!({"post_type": "notice", "notice_type": "group_ban", "group_id": 10, "user_id": 2, "duration": 60}),
            json!({"post_type": "notice", "notice_type": "notify", "sub_type": "poke", "user_id": 2, "target_id": 1}),
            json!({"post_type": "request", "request_type": "friend", "user_id": 2, "flag": "abc"}),
            json!({"post_type": "request", "request_type": "group", "group_id": 10, "flag": "abc"}),
        ];
        for payload in cases {
            let ev = from_value(payload).unwrap();
            let wire = serde_json::to_value(&ev).unwrap();
            assert_ne!(wire.get("sub_type"), Some(&json!("")), "{wire}");
            let again = from_value(wire).unwrap();
            assert_eq!(again.event_name(), ev.event_name());
            assert_eq!(again, ev);
        }
    }

    #[test]
    fn test_event_name_not_taken_from_wire() {
        let ev = from_value(json!({
            "post_type": "notice",
            "notice_type": "friend_add",
            "event_name": "spoofed",
            "to_me": false,
        }))
        .unwrap();
        assert_eq!(ev.event_name(), "notice.friend_add");
        assert!(ev.is_to_me());
    }

    #[test]
    fn test_heartbeat_fields() {
        let ev = from_value(json!({
            "post_type": "meta_event",
            "meta_event_type": "heartbeat",
            "time": 1,
            "self_id": 1,
            "status": {"online": true, "good": false},
            "interval": 5000,
        }))
        .unwrap();
        let Event::Heartbeat(hb) = ev else {
            panic!("expected a heartbeat");
        };
        assert!(hb.status.online);
        assert!(!hb.status.good);
        assert_eq!(hb.interval, 5000);
    }

    #[test]
    fn test_malformed() {
        let err = from_value(json!({
            "post_type": "message",
            "message_type": "private",
            "user_id": "not a number",
        }))
        .unwrap_err();
        match &err {
            EventError::MalformedPayload { event_name, .. } => assert_eq!(event_name, "message.private"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.payload().unwrap()["user_id"], json!("not a number"));

        assert!(matches!(
            from_value(json!({"post_type": "message", "message_type": "group", "message": 42})),
            Err(EventError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_unresolvable() {
        assert!(matches!(
            from_value(json!({"post_type": "oracle"})),
            Err(EventError::UnresolvableType { .. })
        ));
        let err = from_value(json!({
            "post_type": "notice",
            "notice_type": "notify",
            "sub_type": "unknown_sub",
        }))
        .unwrap_err();
        assert_eq!(err.event_name(), Some("notice.notify.unknown_sub"));
        assert!(matches!(from_str("{not json"), Err(EventError::InvalidJson(_))));
    }

    #[test]
    fn test_frame() {
        let frame = Frame::from_str(r#"{"status":"ok","retcode":0,"data":null,"echo":"1"}"#).unwrap();
        assert!(matches!(frame, Frame::ActionResp(ref resp) if resp.is_ok()));
        let frame = Frame::from_str(r#"{"post_type":"notice","notice_type":"friend_add","user_id":3}"#).unwrap();
        assert!(matches!(frame, Frame::Event(Event::FriendAdd(_))));
        assert!(Frame::from_str(r#"{"hello":"world"}"#).is_err());
    }

    #[test]
    fn test_decoder_keeps_going() {
        init_tracing();
        let decoder = Decoder::new(DecoderConfig {
            log_heartbeats: true,
            ..Default::default()
        });
        let frames = [
            r#"{"post_type":"oracle"}"#,
            "garbage",
            r#"{"post_type":"notice","notice_type":"notify","sub_type":"unknown_sub"}"#,
            r#"{"post_type":"message","message_type":"private","user_id":2,"message":"hi"}"#,
            r#"{"post_type":"meta_event","meta_event_type":"heartbeat","interval":5000}"#,
            r#"{"status":"failed","retcode":100,"data":null}"#,
        ];
        let decoded: Vec<_> = frames.iter().map(|f| decoder.decode(f)).collect();
        assert!(decoded[..3].iter().all(Option::is_none));
        assert!(decoded[3..].iter().all(Option::is_some));
        assert!(decoder.decode_event(frames[5]).is_none());
        assert_eq!(
            decoder.decode_event(frames[3]).map(|e| e.kind()),
            Some(EventKind::PrivateMessage)
        );
    }
}
