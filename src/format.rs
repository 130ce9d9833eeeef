use crate::core::types::SizeUnit;
use chrono::NaiveDate;

/// Formats an amount in rupees with Indian digit grouping, e.g.
/// `₹12,34,567` or `₹22.5`. Up to two fraction digits, none when the
/// amount is whole.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }

    let negative = amount < 0.0;
    let paise = (amount.abs() * 100.0).round() as u64;
    let rupees = group_indian(paise / 100);
    let fraction = paise % 100;

    let formatted = if fraction == 0 {
        rupees
    } else if fraction % 10 == 0 {
        format!("{}.{}", rupees, fraction / 10)
    } else {
        format!("{}.{:02}", rupees, fraction)
    };

    if negative {
        format!("-₹{formatted}")
    } else {
        format!("₹{formatted}")
    }
}

/// Indian grouping: the last three digits stand alone, everything above
/// groups in twos (lakh, crore).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Profit margin percentage; zero when the buying price is zero.
pub fn calculate_margin(buying: f64, selling: f64) -> f64 {
    if buying == 0.0 {
        return 0.0;
    }
    (selling - buying) / buying * 100.0
}

/// Selling price from a buying price and a margin percentage.
pub fn calculate_selling_price(buying: f64, margin_percent: f64) -> f64 {
    buying + buying * margin_percent / 100.0
}

/// Printable size, e.g. "1 kg" or "0.5 L".
pub fn format_size(value: f64, unit: SizeUnit) -> String {
    format!("{} {}", value, unit.symbol())
}

/// DD/MM/YYYY, the format receipts here use.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a decimal that may use either `.` or `,` as the separator.
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_drops_fraction_when_whole() {
        assert_eq!(format_currency(22.0), "₹22");
        assert_eq!(format_currency(0.0), "₹0");
    }

    #[test]
    fn currency_keeps_up_to_two_fraction_digits() {
        assert_eq!(format_currency(22.5), "₹22.5");
        assert_eq!(format_currency(22.55), "₹22.55");
    }

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency(1234.0), "₹1,234");
        assert_eq!(format_currency(123456.0), "₹1,23,456");
        assert_eq!(format_currency(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn currency_handles_negative_amounts() {
        assert_eq!(format_currency(-99.5), "-₹99.5");
    }

    #[test]
    fn margin_of_zero_buying_price_is_zero() {
        assert_eq!(calculate_margin(0.0, 100.0), 0.0);
    }

    #[test]
    fn margin_and_selling_price_are_inverses() {
        assert_eq!(calculate_margin(20.0, 22.0), 10.0);
        assert_eq!(calculate_selling_price(20.0, 10.0), 22.0);
    }

    #[test]
    fn size_renders_value_and_unit() {
        assert_eq!(format_size(1.0, SizeUnit::Kg), "1 kg");
        assert_eq!(format_size(0.5, SizeUnit::L), "0.5 L");
    }

    #[test]
    fn date_renders_day_first() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(format_date(date), "15/01/2026");
    }

    #[test]
    fn decimals_accept_comma_separator() {
        assert_eq!(parse_decimal("12,5"), Some(12.5));
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal("abc"), None);
    }
}
