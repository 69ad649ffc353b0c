//! Instance-time formatting
//!
//! Every log line and export field measures time in milliseconds since the
//! current instance loaded, as reported by the game client.

/// Format instance milliseconds as `MM:SS.mmm`.
///
/// Minutes are not wrapped into hours; a 75 minute match prints `75:00.000`.
pub fn format_instance_time(ms: u32) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms / 1000) % 60;
    let millis = ms % 1000;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}

/// Bracketed timestamp prefix used on every log line.
pub fn timestamp_prefix(ms: u32) -> String {
    format!("[{}]", format_instance_time(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_instance_time(0), "00:00.000");
    }

    #[test]
    fn formats_minutes_seconds_millis() {
        assert_eq!(format_instance_time(83_456), "01:23.456");
        assert_eq!(timestamp_prefix(83_456), "[01:23.456]");
    }

    #[test]
    fn minutes_do_not_wrap() {
        assert_eq!(format_instance_time(75 * 60_000), "75:00.000");
    }
}
