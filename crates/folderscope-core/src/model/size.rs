/// Size formatting utilities — megabyte display strings.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Format a byte count as megabytes with two-decimal fixed precision.
///
/// Every size in the UI uses this single unit, so a 100-byte file shows
/// as "0.00 MB" rather than switching units.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mb_zero() {
        assert_eq!(format_mb(0), "0.00 MB");
    }

    #[test]
    fn test_format_mb_exact_megabyte() {
        assert_eq!(format_mb(1_048_576), "1.00 MB");
    }

    #[test]
    fn test_format_mb_fractions() {
        assert_eq!(format_mb(524_288), "0.50 MB");
        assert_eq!(format_mb(1_572_864), "1.50 MB");
    }

    #[test]
    fn test_format_mb_small_file_rounds_down() {
        assert_eq!(format_mb(100), "0.00 MB");
    }

    #[test]
    fn test_format_mb_large() {
        assert_eq!(format_mb(10_485_760_000), "10000.00 MB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
