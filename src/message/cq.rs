//! CQ code, the string form of a OneBot v11 message: `hello[CQ:at,qq=10001]`.

use serde_json::Value;

use super::Segment;

const CQ_START: &str = "[CQ:";

fn escape(s: &str, in_param: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '[' => out.push_str("&#91;"),
            ']' => out.push_str("&#93;"),
            ',' if in_param => out.push_str("&#44;"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(s: &str) -> String {
    s.replace("&#91;", "[")
        .replace("&#93;", "]")
        .replace("&#44;", ",")
        .replace("&amp;", "&")
}

fn push_text(segments: &mut Vec<Segment>, raw: &str) {
    if !raw.is_empty() {
        segments.push(Segment::text(unescape(raw)));
    }
}

/// Splits a CQ-coded string into segments. Never fails: an unterminated code is kept as text.
pub fn parse(s: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = s;
    while let Some(start) = rest.find(CQ_START) {
        let Some(len) = rest[start..].find(']') else {
            break;
        };
        push_text(&mut segments, &rest[..start]);

        let body = &rest[start + CQ_START.len()..start + len];
        let mut parts = body.split(',');
        let mut seg = Segment::new(parts.next().unwrap_or_default());
        for part in parts {
            match part.split_once('=') {
                Some((k, v)) => seg.data.insert(k.to_string(), Value::String(unescape(v))),
                None => seg.data.insert(part.to_string(), Value::String(String::new())),
            };
        }
        segments.push(seg);
        rest = &rest[start + len + 1..];
    }
    push_text(&mut segments, rest);
    segments
}

/// Renders segments back into a CQ-coded string.
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        if let Some(text) = seg.as_text() {
            out.push_str(&escape(text, false));
            continue;
        }
        out.push_str(CQ_START);
        out.push_str(&seg.ty);
        for (k, v) in &seg.data {
            out.push(',');
            out.push_str(k);
            out.push('=');
            match v {
                Value::String(s) => out.push_str(&escape(s, true)),
                Value::Null => {}
                v => out.push_str(&escape(&v.to_string(), true)),
            }
        }
        out.push(']');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{parse, render};
    use crate::message::Segment;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse("hi[CQ:at,qq=10001] there"),
            vec![
                Segment::text("hi"),
                Segment::new("at").with("qq", "10001"),
                Segment::text(" there"),
            ]
        );
        assert_eq!(
            parse("&#91;x&#93; &amp;[CQ:image,file=a&#44;b.png]"),
            vec![
                Segment::text("[x] &"),
                Segment::new("image").with("file", "a,b.png"),
            ]
        );
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("[CQ:shake]"), vec![Segment::new("shake")]);
    }

    #[test]
    fn test_parse_unterminated() {
        assert_eq!(parse("a[CQ:at,qq=1"), vec![Segment::text("a[CQ:at,qq=1")]);
    }

    #[test]
    fn test_render() {
        let segs = vec![
            Segment::reply(7),
            Segment::text("a[b]"),
            Segment::new("image").with("file", "x,y").with("cache", 0),
        ];
        assert_eq!(
            render(&segs),
            "[CQ:reply,id=7]a&#91;b&#93;[CQ:image,cache=0,file=x&#44;y]"
        );
    }
}
