//! Currency formatting for reports.

/// Format a rupee amount as whole rupees with Indian digit grouping,
/// e.g. `1234567.4` → `₹12,34,567`.
pub fn format_inr(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.4), "₹999");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(12_345.0), "₹12,345");
        assert_eq!(format_inr(123_456.0), "₹1,23,456");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
        assert_eq!(format_inr(100_000_000.0), "₹10,00,00,000");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_inr(-250_000.0), "-₹2,50,000");
    }
}
