//! Text rendering of countdown durations

use chrono::TimeDelta;

/// Render a duration as `H:MM:SS`, with a `.ffffff` microsecond suffix when
/// the sub-second part is non-zero. Negative durations get a leading `-`.
pub fn duration_text(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let magnitude = delta.abs();
    let micros = magnitude.subsec_nanos() / 1_000;
    let base = format!("{}{}", sign, hms(magnitude.num_seconds()));

    if micros > 0 {
        format!("{}.{:06}", base, micros)
    } else {
        base
    }
}

/// Render a duration as whole-second `H:MM:SS` for display.
///
/// Sub-second parts are truncated and anything at or below zero reads
/// `0:00:00`.
pub fn clock_text(delta: TimeDelta) -> String {
    hms(delta.num_seconds().max(0))
}

fn hms(total_seconds: i64) -> String {
    format!(
        "{}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_text() {
        assert_eq!(duration_text(TimeDelta::zero()), "0:00:00");
        assert_eq!(duration_text(TimeDelta::seconds(5)), "0:00:05");
        assert_eq!(duration_text(TimeDelta::seconds(25 * 60)), "0:25:00");
        assert_eq!(duration_text(TimeDelta::seconds(23 * 3600 + 59 * 60 + 59)), "23:59:59");
        assert_eq!(duration_text(TimeDelta::milliseconds(4_500)), "0:00:04.500000");
        assert_eq!(duration_text(TimeDelta::milliseconds(-1_250)), "-0:00:01.250000");
    }

    #[test]
    fn test_clock_text() {
        assert_eq!(clock_text(TimeDelta::milliseconds(4_999)), "0:00:04");
        assert_eq!(clock_text(TimeDelta::seconds(3_661)), "1:01:01");
        assert_eq!(clock_text(TimeDelta::seconds(-3)), "0:00:00");
        assert_eq!(clock_text(TimeDelta::milliseconds(-400)), "0:00:00");
    }
}
