// 💰 Rupiah formatting - id-ID locale, IDR, no fractional digits
//
// Output matches Intl.NumberFormat('id-ID', { style: 'currency', currency: 'IDR' })
// with zero fraction digits: "Rp", a no-break space, then dot-grouped digits.

/// Shown in place of a row total of zero
pub const ZERO_PLACEHOLDER: &str = "-";

const CURRENCY_PREFIX: &str = "Rp";
const PREFIX_SEPARATOR: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';

/// Format an amount as Rupiah, e.g. 252000 -> "Rp 252.000" (no-break space)
pub fn format_currency(amount: u64) -> String {
    format!("{}{}{}", CURRENCY_PREFIX, PREFIX_SEPARATOR, group_digits(amount))
}

/// Row total cell: "-" for zero, formatted Rupiah otherwise
pub fn format_row_total(amount: u64) -> String {
    if amount == 0 {
        ZERO_PLACEHOLDER.to_string()
    } else {
        format_currency(amount)
    }
}

fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "Rp\u{a0}0");
        assert_eq!(format_currency(200), "Rp\u{a0}200");
        assert_eq!(format_currency(1000), "Rp\u{a0}1.000");
        assert_eq!(format_currency(50000), "Rp\u{a0}50.000");
        assert_eq!(format_currency(252000), "Rp\u{a0}252.000");
        assert_eq!(format_currency(300000), "Rp\u{a0}300.000");
        assert_eq!(format_currency(1234567), "Rp\u{a0}1.234.567");
    }

    #[test]
    fn test_format_currency_large() {
        assert_eq!(
            format_currency(u64::MAX),
            "Rp\u{a0}18.446.744.073.709.551.615"
        );
    }

    #[test]
    fn test_row_total_placeholder() {
        assert_eq!(format_row_total(0), ZERO_PLACEHOLDER);
        assert_eq!(format_row_total(2000), "Rp\u{a0}2.000");
    }
}
