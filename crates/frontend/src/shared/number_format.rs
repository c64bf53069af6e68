//! pt-BR number formatting for tables, charts and exports.

/// Formats with `.` as thousands separator and `,` as decimal separator.
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let integer = grouped.chars().rev().collect::<String>();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, integer, d),
        None => format!("{}{}", sign, integer),
    }
}

/// Up to `max_decimals` fraction digits, trailing zeros dropped.
pub fn format_decimal(value: f64, max_decimals: usize) -> String {
    let formatted = format_number_with_decimals(value, max_decimals);
    if !formatted.contains(',') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches(',')
        .to_string()
}

/// `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 2);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-R$ {}", abs),
        None => format!("R$ {}", formatted),
    }
}

pub fn format_liters(value: f64) -> String {
    format!("{} lts", format_decimal(value, 3))
}

pub fn format_kg(value: f64) -> String {
    format!("{} Kg", format_decimal(value, 2))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(1234567.891, 3), "1.234.567,891");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1.234,50");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(-15.0), "-R$ 15,00");
    }

    #[test]
    fn test_format_decimal_trims_zeros() {
        assert_eq!(format_decimal(1500.0, 3), "1.500");
        assert_eq!(format_decimal(1500.25, 3), "1.500,25");
        assert_eq!(format_decimal(0.126, 2), "0,13");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_liters(12345.5), "12.345,5 lts");
        assert_eq!(format_kg(980.456), "980,46 Kg");
        assert_eq!(format_percent(12.5), "12,5%");
    }
}
