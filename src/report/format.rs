//! Number formatting for the console report.

use std::time::Duration;

/// Formats an integer with `.` as the thousands separator (`100000` -> `100.000`).
#[must_use]
pub fn format_number(number: impl Into<u128>) -> String {
    let number: u128 = number.into();
    let digits = number.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    out
}

/// Seconds as a plain number: `5` for five seconds, `0.25` for a quarter.
#[must_use]
pub fn format_seconds(delay: Duration) -> String {
    delay.as_secs_f64().to_string()
}
