//! Time-code recognition in free-form text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::TimeCodeToken;

/// `m:ss`, `mm:ss`, `h:mm:ss` or `hh:mm:ss`, not embedded in a longer ASCII word or
/// digit run. Boundaries are ASCII-only, so non-Latin letters count as separators.
static TIME_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?)(?-u:\b)")
        .expect("time-code pattern is valid")
});

/// Find every time code in `text`, left to right.
///
/// Never fails: text without time codes yields an empty vector.
///
/// # Examples
///
/// ```
/// use timecode_markers::parse_timecodes;
///
/// let tokens = parse_timecodes("Check 00:05:30 and 1:02");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].normalized_text(), "05:30");
/// assert_eq!(tokens[0].offset_seconds(), 330);
/// assert_eq!(tokens[1].offset_seconds(), 62);
/// ```
pub fn parse_timecodes(text: &str) -> Vec<TimeCodeToken> {
    TIME_CODE_PATTERN.find_iter(text).filter_map(|m| TimeCodeToken::from_raw(m.as_str())).collect()
}
