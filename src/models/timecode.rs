use std::fmt;

use serde::Serialize;

/// A time code recognized in free-form text.
///
/// `normalized_text` drops a redundant zero hour component (`"00:05:30"` is shown
/// as `"05:30"`); `offset_seconds` is the same either way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeCodeToken {
    raw_text: String,
    normalized_text: String,
    offset_seconds: u32,
}

impl TimeCodeToken {
    /// Build a token from a raw `m:ss`, `mm:ss`, `h:mm:ss` or `hh:mm:ss` string.
    ///
    /// Returns `None` if `raw` does not have that shape. Components are not checked
    /// against clock bounds, so `"1:75"` is accepted and means 135 seconds.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        let well_formed = matches!(parts.len(), 2 | 3)
            && parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
            && parts[0].len() <= 2
            && parts[1..].iter().all(|p| p.len() == 2);
        if !well_formed {
            return None;
        }

        // At most two digits per component, so these cannot overflow
        let values: Vec<u32> = parts.iter().map(|p| p.parse().ok()).collect::<Option<_>>()?;

        let (offset_seconds, normalized_text) = match values.as_slice() {
            [minutes, seconds] => (minutes * 60 + seconds, raw.to_string()),
            [hours, minutes, seconds] => {
                let offset = hours * 3600 + minutes * 60 + seconds;
                let normalized =
                    if *hours == 0 { format!("{}:{}", parts[1], parts[2]) } else { raw.to_string() };
                (offset, normalized)
            }
            _ => return None,
        };

        Some(Self { raw_text: raw.to_string(), normalized_text, offset_seconds })
    }

    /// Text as it appeared in the source.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Display form, without a zero hour component.
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    pub fn offset_seconds(&self) -> u32 {
        self.offset_seconds
    }
}

impl fmt::Display for TimeCodeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_text)
    }
}
