use std::time::Duration;

/// Format remaining time as MM:SS, rounded to the nearest second.
/// Minutes widen past two digits for countdowns over 99 minutes.
pub fn format_remaining(remaining: Duration) -> String {
    let total_secs = (remaining.as_millis() + 500) / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_minutes_and_seconds() {
        assert_eq!(format_remaining(Duration::from_secs(200)), "03:20");
    }

    #[test]
    fn test_pads_single_digits() {
        assert_eq!(format_remaining(Duration::from_secs(5)), "00:05");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_remaining(Duration::ZERO), "00:00");
    }

    #[test]
    fn test_rounds_to_nearest_second() {
        assert_eq!(format_remaining(Duration::from_millis(4_499)), "00:04");
        assert_eq!(format_remaining(Duration::from_millis(4_500)), "00:05");
    }

    #[test]
    fn test_exact_minute() {
        assert_eq!(format_remaining(Duration::from_secs(90)), "01:30");
        assert_eq!(format_remaining(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn test_minutes_widen_past_two_digits() {
        assert_eq!(format_remaining(Duration::from_secs(6_100)), "101:40");
    }
}
