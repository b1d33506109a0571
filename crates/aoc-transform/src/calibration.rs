//! Calibration values: the first and last digit on each line.

use tracing::debug;

/// Two-digit value formed by the first and last digit of `line`.
///
/// A line with a single digit uses it twice; a line with no digit is worth 0.
pub fn calibration_value(line: &str) -> u32 {
    let mut digits = line.chars().filter_map(|c| c.to_digit(10));
    let Some(first) = digits.next() else {
        return 0;
    };
    let last = digits.last().unwrap_or(first);
    first * 10 + last
}

/// Sums the calibration value of every line.
pub fn calibration_total<'a>(lines: impl IntoIterator<Item = &'a str>) -> u64 {
    let mut count = 0usize;
    let total: u64 = lines
        .into_iter()
        .inspect(|_| count += 1)
        .map(|line| u64::from(calibration_value(line)))
        .sum();
    debug!(lines = count, total, "calibration summed");
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_digit() {
        assert_eq!(calibration_value("1abc2"), 12);
        assert_eq!(calibration_value("pqr3stu8vwx"), 38);
        assert_eq!(calibration_value("a1b2c3d4e5f"), 15);
        assert_eq!(calibration_value("treb7uchet"), 77);
    }

    #[test]
    fn line_without_digits_is_zero() {
        assert_eq!(calibration_value(""), 0);
        assert_eq!(calibration_value("abc"), 0);
    }

    #[test]
    fn totals_lines() {
        assert_eq!(calibration_total("1abc2\n\nx9".lines()), 12 + 99);
        assert_eq!(calibration_total("".lines()), 0);
    }
}
