//! Formatting utilities for playback times and media captions.

/// Format a position in seconds as `m:ss`, or `h:mm:ss` past one hour.
///
/// Negative and non-finite values format as `0:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Format the `current / duration` label shown by the controls.
pub fn format_progress(current: f64, duration: f64) -> String {
    format!("{} / {}", format_timestamp(current), format_timestamp(duration))
}

/// Format pixel dimensions (e.g., "1920 × 1080").
pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{} × {}", width, height)
}

/// Format a count with a singular/plural noun (e.g., "1 line", "12 words").
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(5.9), "0:05");
        assert_eq!(format_timestamp(61.0), "1:01");
        assert_eq!(format_timestamp(3599.0), "59:59");
        assert_eq!(format_timestamp(3661.0), "1:01:01");
        assert_eq!(format_timestamp(-4.0), "0:00");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(42.0, 201.0), "0:42 / 3:21");
    }

    #[test]
    fn test_format_dimensions() {
        assert_eq!(format_dimensions(1920, 1080), "1920 × 1080");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "line"), "1 line");
        assert_eq!(format_count(0, "word"), "0 words");
        assert_eq!(format_count(12, "word"), "12 words");
    }
}
