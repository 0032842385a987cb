/// Characters kept at each end of a message preview.
pub const PREVIEW_CHARS: usize = 50;

/// Bounded single-line preview of `text`.
///
/// Text longer than `2 * keep` characters keeps its first and last `keep`
/// characters around an elision marker with the omitted count. Newlines are
/// escaped afterwards so the result always fits on one log line.
pub fn preview(text: &str, keep: usize) -> String {
    let total = text.chars().count();
    let kept = keep.saturating_mul(2);
    let bounded = if total > kept {
        let head: String = text.chars().take(keep).collect();
        let tail: String = text.chars().skip(total - keep).collect();
        format!("{head}...({} chars omitted)...{tail}", total - kept)
    } else {
        text.to_string()
    };
    bounded.replace('\r', "\\r").replace('\n', "\\n")
}
