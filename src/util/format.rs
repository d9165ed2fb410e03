//display formatting for amounts and percentages (en-US conventions)

//symbol prefix and number of minor digits for a currency code
fn currency_style(code: &str) -> (String, usize) {
    match code.to_uppercase().as_str() {
        "USD" => ("$".to_string(), 2),
        "EUR" => ("€".to_string(), 2),
        "GBP" => ("£".to_string(), 2),
        "JPY" => ("¥".to_string(), 0),
        "INR" => ("₹".to_string(), 2),
        other => (format!("{} ", other), 2),
    }
}

//inserts thousands separators into a run of ascii digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

//formats an amount like "$1,234.56" or "-€12.00"
pub fn format_currency(amount: f64, currency: &str) -> String {
    let (symbol, decimals) = currency_style(currency);

    if amount.is_nan() {
        return "NaN".to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}{}∞", sign, symbol);
    }

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    //-0.001 rounds to zero and should not print a sign
    let sign = if fixed.chars().all(|c| c == '0' || c == '.') {
        ""
    } else {
        sign
    };

    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction),
        None => format!("{}{}{}", sign, symbol, group_thousands(whole)),
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_grouping() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0, "usd"), "$1,000,000.00");
        assert_eq!(format_currency(999.999, "USD"), "$1,000.00");
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
        assert_eq!(format_currency(12.0, "USD"), "$12.00");
    }

    #[test]
    fn negatives_and_other_currencies() {
        assert_eq!(format_currency(-30000.0, "USD"), "-$30,000.00");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
        assert_eq!(format_currency(1234.5, "EUR"), "€1,234.50");
        assert_eq!(format_currency(1234.6, "JPY"), "¥1,235");
        assert_eq!(format_currency(50.0, "CHF"), "CHF 50.00");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_currency(f64::INFINITY, "USD"), "$∞");
        assert_eq!(format_currency(f64::NAN, "USD"), "NaN");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(30.0, 1), "30.0%");
        assert_eq!(format_percentage(12.346, 2), "12.35%");
        assert_eq!(format_percentage(-5.0, 0), "-5%");
    }
}
