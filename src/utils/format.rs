//! Formatting utilities for display values.

/// Size units, base 1024.
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display (e.g., "1.5 KB", "3.07 MB").
///
/// Two decimal places with trailing zeros dropped. Anything past the last
/// unit stays in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(value), SIZE_UNITS[unit])
}

/// Round half up to two decimals and strip trailing zeros ("1.50" -> "1.5", "1.00" -> "1").
///
/// `{:.2}` alone rounds exact ties to even (1.125 -> "1.12"), hence the explicit round.
fn trim_decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", rounded);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Count label shown next to the list header ("1 file", "3 files").
pub fn format_count(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} file{}", count, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1100), "1.07 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_size_rounds_ties_up() {
        // 1.125 KB and 1.625 KB sit exactly on the rounding boundary.
        assert_eq!(format_size(1152), "1.13 KB");
        assert_eq!(format_size(1664), "1.63 KB");
        // Just under 1 MB rounds up within the KB unit.
        assert_eq!(format_size(1024 * 1024 - 1), "1024 KB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(2 * 1024u64.pow(4)), "2048 GB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0 files");
        assert_eq!(format_count(1), "1 file");
        assert_eq!(format_count(7), "7 files");
    }
}
