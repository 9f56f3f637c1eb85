//! Number formatting for headline figures.

/// Formats whole dollars with thousands separators, e.g. `$450,000`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

/// Change relative to a previous period, always signed: `+12.5%`, `-3%`.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "+" };
    let magnitude = value.abs();
    if magnitude.fract() == 0.0 {
        format!("{}{}%", sign, magnitude as u64)
    } else {
        format!("{}{:.1}%", sign, magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(1000), "$1,000");
        assert_eq!(format_usd(85_000), "$85,000");
        assert_eq!(format_usd(450_000), "$450,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(12.5), "+12.5%");
        assert_eq!(format_signed_percent(22.0), "+22%");
        assert_eq!(format_signed_percent(-3.0), "-3%");
    }
}
