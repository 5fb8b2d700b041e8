//! Locale-aware number formatting for listings.
//!
//! Follows the ru-RU convention by default: digits grouped by three with a
//! no-break space, decimal comma, currency sign after the amount.
//!
//! ```text
//! 11900000  →  "11 900 000 ₽"
//! 158.3     →  "158,3 м²"
//! ```

use crate::config::LocaleConfig;

/// Group the digits of a whole number with `separator`.
pub fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Fixed price with grouping and currency suffix.
pub fn format_price(amount: u64, locale: &LocaleConfig) -> String {
    format!(
        "{}{}",
        group_digits(amount, &locale.group_separator),
        locale.currency_suffix
    )
}

/// A decimal with at most one fractional digit, trailing zero dropped.
pub fn format_decimal(value: f64, locale: &LocaleConfig) -> String {
    let tenths = (value.abs() * 10.0).round() as u64;
    let whole = group_digits(tenths / 10, &locale.group_separator);
    let sign = if value < 0.0 && tenths > 0 { "-" } else { "" };
    match tenths % 10 {
        0 => format!("{sign}{whole}"),
        frac => format!("{sign}{whole}{}{frac}", locale.decimal_separator),
    }
}

/// Floor area with unit suffix.
pub fn format_area(area: f64, locale: &LocaleConfig) -> String {
    format!("{}{}", format_decimal(area, locale), locale.area_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NBSP: &str = "\u{a0}";

    fn ru() -> LocaleConfig {
        LocaleConfig::default()
    }

    #[test]
    fn groups_by_thousands() {
        assert_eq!(group_digits(0, " "), "0");
        assert_eq!(group_digits(999, " "), "999");
        assert_eq!(group_digits(1000, " "), "1 000");
        assert_eq!(group_digits(123456, " "), "123 456");
        assert_eq!(group_digits(1234567, " "), "1 234 567");
    }

    #[test]
    fn fixed_price_uses_locale_grouping() {
        assert_eq!(
            format_price(11_900_000, &ru()),
            format!("11{NBSP}900{NBSP}000{NBSP}₽")
        );
    }

    #[test]
    fn fixed_price_reads_as_spaced_digits() {
        let shown = format_price(11_900_000, &ru()).replace(NBSP, " ");
        assert_eq!(shown, "11 900 000 ₽");
    }

    #[test]
    fn price_with_custom_locale() {
        let en = LocaleConfig {
            group_separator: ",".to_string(),
            currency_suffix: " RUB".to_string(),
            ..LocaleConfig::default()
        };
        assert_eq!(format_price(12_600_000, &en), "12,600,000 RUB");
    }

    #[test]
    fn decimals_use_comma_and_drop_zero_fraction() {
        assert_eq!(format_decimal(158.3, &ru()), "158,3");
        assert_eq!(format_decimal(123.0, &ru()), "123");
        assert_eq!(format_decimal(60.04, &ru()), "60");
        assert_eq!(format_decimal(-2.5, &ru()), "-2,5");
    }

    #[test]
    fn area_has_unit_suffix() {
        assert_eq!(format_area(158.3, &ru()), format!("158,3{NBSP}м²"));
        assert_eq!(format_area(135.0, &ru()), format!("135{NBSP}м²"));
    }
}
