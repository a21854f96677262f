/// Utilities for date, time and money formatting
///
/// Provides consistent display formatting across the application

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jun 15, 2024".
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %d, %Y").to_string()
}

/// Format a timestamp as "Jun 15, 2024 • 14:02".
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%b %d, %Y • %H:%M").to_string()
}

/// Format a currency amount as "$1,234.56".
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_thousands(whole), frac)
}

/// Format an integer with thousands separators: 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 14, 2, 26)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ts()), "Jun 15, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(ts()), "Jun 15, 2024 • 14:02");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-99.99), "-$99.99");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
