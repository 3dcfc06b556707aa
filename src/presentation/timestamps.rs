/// Format a marker offset the way players label their timeline:
/// - Under an hour: "m:ss" ("0:05", "12:30")
/// - An hour or more: "h:mm:ss" ("1:02:03")
pub fn format_offset(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_offset(0), "0:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_offset(5), "0:05");
        assert_eq!(format_offset(750), "12:30");
        assert_eq!(format_offset(3599), "59:59");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_offset(3600), "1:00:00");
        assert_eq!(format_offset(3723), "1:02:03");
        assert_eq!(format_offset(36_000), "10:00:00");
    }

    #[test]
    fn test_format_lax_input_round_trips_to_canonical() {
        // "1:75" parses to 135 seconds and is shown canonically
        assert_eq!(format_offset(135), "2:15");
    }
}
