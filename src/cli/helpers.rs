//! Shared helper functions for CLI commands

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Format a monetary amount with its currency
///
/// Euro amounts use the symbol prefix the survey reports have always used;
/// anything else falls back to "amount CODE".
pub fn format_money(amount: f64, currency: &str) -> String {
    match currency {
        "EUR" => format!("€{:.2}", amount),
        "USD" => format!("${:.2}", amount),
        "GBP" => format!("£{:.2}", amount),
        _ => format!("{:.2} {}", amount, currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer string", 10), "a longe...");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(500.0, "EUR"), "€500.00");
        assert_eq!(format_money(2.5, "USD"), "$2.50");
        assert_eq!(format_money(100.0, "NOK"), "100.00 NOK");
    }
}
