/// Parse a sanitized amount string, NaN when empty or malformed
pub fn parse_amount(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Format a USD value with four decimals
pub fn format_usd(value: f64) -> String {
    format!("${:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("0."), 0.0);
        assert!(parse_amount("").is_nan());
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(50.0), "$50.0000");
    }
}
