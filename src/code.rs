//! UPU S10 tracking codes, e.g. `SS123456785BR`: two letter service prefix,
//! eight digit serial, one check digit and two letter country suffix.

use std::fmt;

const WEIGHTS: [u32; 8] = [8, 6, 4, 2, 3, 5, 9, 7];
pub const MAX_SERIAL: u32 = 99_999_999;
/// Largest look-behind or look-ahead accepted by a postal code search.
pub const MAX_WINDOW: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingNumber {
    prefix: String,
    serial: u32,
    suffix: String,
}

impl TrackingNumber {
    /// Parses a code with or without its check digit. A check digit that is
    /// present is discarded; [`fmt::Display`] always renders the computed one.
    pub fn parse(input: &str) -> Option<Self> {
        let code = input.trim().to_ascii_uppercase();
        if !code.is_ascii() {
            return None;
        }
        let digits = match code.len() {
            12 => 8,
            13 => 9,
            _ => return None,
        };

        let (prefix, rest) = code.split_at(2);
        let (number, suffix) = rest.split_at(digits);
        if !prefix.bytes().all(|b| b.is_ascii_alphabetic())
            || !suffix.bytes().all(|b| b.is_ascii_alphabetic())
            || !number.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        Some(Self {
            prefix: prefix.to_string(),
            serial: number[..8].parse().ok()?,
            suffix: suffix.to_string(),
        })
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn check_digit(&self) -> u32 {
        check_digit(self.serial)
    }

    pub fn with_serial(&self, serial: u32) -> Self {
        Self {
            prefix: self.prefix.clone(),
            serial: serial.min(MAX_SERIAL),
            suffix: self.suffix.clone(),
        }
    }

    /// Codes from `previous` serials behind to `next` serials ahead, in
    /// ascending order. Both sides are capped at [`MAX_WINDOW`] and the
    /// result is clamped to the serial range.
    pub fn window(&self, previous: u32, next: u32) -> impl Iterator<Item = TrackingNumber> + '_ {
        let first = self.serial.saturating_sub(previous.min(MAX_WINDOW));
        let last = self
            .serial
            .saturating_add(next.min(MAX_WINDOW))
            .min(MAX_SERIAL);
        (first..=last).map(move |serial| self.with_serial(serial))
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:08}{}{}",
            self.prefix,
            self.serial,
            self.check_digit(),
            self.suffix
        )
    }
}

pub fn check_digit(serial: u32) -> u32 {
    let digits = format!("{:08}", serial);
    let sum: u32 = digits
        .bytes()
        .zip(WEIGHTS)
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();

    match sum % 11 {
        0 => 5,
        1 => 0,
        r => 11 - r,
    }
}

/// Completes `partial` with a valid check digit, or `None` when it does not
/// look like a tracking code.
pub fn generate_valid_code(partial: &str) -> Option<String> {
    TrackingNumber::parse(partial).map(|code| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_known_code() {
        assert_eq!(check_digit(12345678), 5);
        assert_eq!(
            generate_valid_code("SS12345678BR").as_deref(),
            Some("SS123456785BR")
        );
    }

    #[test]
    fn test_check_digit_special_remainders() {
        // 00000000 sums to 0, remainder 0
        assert_eq!(check_digit(0), 5);
        // 00000003 sums to 21, remainder 10
        assert_eq!(check_digit(3), 1);
        // 00000004 sums to 28, remainder 6
        assert_eq!(check_digit(4), 5);
        // 00000008 sums to 56, remainder 1
        assert_eq!(check_digit(8), 0);
    }

    #[test]
    fn test_existing_check_digit_is_recomputed() {
        assert_eq!(
            generate_valid_code("ss123456780br").as_deref(),
            Some("SS123456785BR")
        );
        assert_eq!(
            generate_valid_code(" AA123456789BR ").as_deref(),
            Some("AA123456785BR")
        );
    }

    #[test]
    fn test_rejects_malformed_codes() {
        assert_eq!(generate_valid_code(""), None);
        assert_eq!(generate_valid_code("AA1234567BR"), None);
        assert_eq!(generate_valid_code("A1123456789BR"), None);
        assert_eq!(generate_valid_code("AA12345678X9B"), None);
        assert_eq!(generate_valid_code("ÁA12345678BR"), None);
    }

    #[test]
    fn test_window_is_ascending_and_inclusive() {
        let code = TrackingNumber::parse("AA00000100BR").unwrap();
        let serials: Vec<u32> = code.window(2, 3).map(|c| c.serial()).collect();
        assert_eq!(serials, vec![98, 99, 100, 101, 102, 103]);
    }

    #[test]
    fn test_window_clamps_at_both_ends() {
        let low = TrackingNumber::parse("AA00000001BR").unwrap();
        let serials: Vec<u32> = low.window(5, 0).map(|c| c.serial()).collect();
        assert_eq!(serials, vec![0, 1]);

        let high = TrackingNumber::parse("AA99999998BR").unwrap();
        let serials: Vec<u32> = high.window(0, 10).map(|c| c.serial()).collect();
        assert_eq!(serials, vec![99_999_998, 99_999_999]);
    }

    #[test]
    fn test_window_is_capped() {
        let code = TrackingNumber::parse("AA00001000BR").unwrap();
        assert_eq!(code.window(0, u32::MAX).count(), MAX_WINDOW as usize + 1);
        assert_eq!(
            code.window(u32::MAX, u32::MAX).count(),
            2 * MAX_WINDOW as usize + 1
        );

        let first = code.window(u32::MAX, 0).next().unwrap();
        assert_eq!(first.serial(), 1000 - MAX_WINDOW);
    }

    #[test]
    fn test_window_renders_valid_codes() {
        let code = TrackingNumber::parse("SS12345677BR").unwrap();
        let codes: Vec<String> = code.window(0, 1).map(|c| c.to_string()).collect();
        assert_eq!(codes[1], "SS123456785BR");
    }
}
