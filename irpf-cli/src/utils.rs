use std::sync::LazyLock;

use irpf_core::calculations::common::{round_half_up, to_currency};
use regex::Regex;
use rust_decimal::Decimal;

static NON_AMOUNT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9,]").expect("static pattern is valid"));

/// Keeps only digits and commas, the characters a pt-BR amount field accepts.
pub fn sanitize_amount(s: &str) -> String {
    NON_AMOUNT_CHARS.replace_all(s, "").into_owned()
}

/// Parses a pt-BR formatted amount such as `"7.000,50"` or `"R$ 1.234,56"`.
///
/// Everything except digits and `,` is discarded, so `.` thousands
/// separators and currency symbols are ignored. The first `,` separates the
/// centavos and anything after a second `,` is dropped. Returns `None` when
/// no digits remain, or when the value cannot be represented (logs a warning).
pub fn parse_brl_amount(s: &str) -> Option<Decimal> {
    let sanitized = sanitize_amount(s);
    let mut parts = sanitized.split(',');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let normalized = match (whole.is_empty(), fraction.is_empty()) {
        (_, true) => whole.to_string(),
        (true, false) => format!("0.{fraction}"),
        (false, false) => format!("{whole}.{fraction}"),
    };

    normalized.parse().map_or_else(
        |e| {
            tracing::warn!(input = %s, "invalid amount: {}", e);
            None
        },
        Some,
    )
}

/// Formats a decimal as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// Rounds half-up to centavos; negative values carry a leading `-`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}R$ {},{cents}", group_thousands(whole))
}

/// Formats a computed amount as reais, using "—" for NaN and infinities.
pub fn format_amount(value: f64) -> String {
    to_currency(value)
        .map(format_brl)
        .unwrap_or_else(|| "—".to_string())
}

/// Formats a fraction as a percentage with a decimal comma (`0.275` → `27,5%`).
pub fn format_percent(fraction: f64) -> String {
    match to_currency(fraction * 100.0) {
        Some(pct) => format!("{}%", pct.normalize().to_string().replace('.', ",")),
        None => "—".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_brl_amount tests
    // =========================================================================

    #[test]
    fn parse_brl_amount_accepts_dot_thousands_and_comma_decimals() {
        assert_eq!(parse_brl_amount("1.234,56"), Some(dec!(1234.56)));
        assert_eq!(parse_brl_amount("7.000"), Some(dec!(7000)));
    }

    #[test]
    fn parse_brl_amount_ignores_currency_symbol_and_spaces() {
        assert_eq!(parse_brl_amount("  R$ 5.000,00 "), Some(dec!(5000.00)));
    }

    #[test]
    fn parse_brl_amount_drops_text_after_second_comma() {
        assert_eq!(parse_brl_amount("1,5,9"), Some(dec!(1.5)));
    }

    #[test]
    fn parse_brl_amount_leading_comma_is_fraction() {
        assert_eq!(parse_brl_amount(",75"), Some(dec!(0.75)));
    }

    #[test]
    fn parse_brl_amount_strips_minus_sign() {
        assert_eq!(parse_brl_amount("-5"), Some(dec!(5)));
    }

    #[test]
    fn parse_brl_amount_without_digits_is_none() {
        assert_eq!(parse_brl_amount(""), None);
        assert_eq!(parse_brl_amount("abc"), None);
        assert_eq!(parse_brl_amount(","), None);
    }

    #[test]
    fn parse_brl_amount_overflow_is_none() {
        assert_eq!(parse_brl_amount(&"9".repeat(40)), None);
    }

    // =========================================================================
    // format tests
    // =========================================================================

    #[test]
    fn format_brl_groups_thousands() {
        assert_eq!(format_brl(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_brl(dec!(1234567.8)), "R$ 1.234.567,80");
        assert_eq!(format_brl(dec!(999)), "R$ 999,00");
        assert_eq!(format_brl(dec!(0)), "R$ 0,00");
    }

    #[test]
    fn format_brl_rounds_half_up() {
        assert_eq!(format_brl(dec!(171.8075)), "R$ 171,81");
    }

    #[test]
    fn format_brl_negative_values() {
        assert_eq!(format_brl(dec!(-1500)), "-R$ 1.500,00");
        assert_eq!(format_brl(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn format_amount_handles_non_finite() {
        assert_eq!(format_amount(1854.0), "R$ 1.854,00");
        assert_eq!(format_amount(f64::NAN), "—");
    }

    #[test]
    fn format_percent_uses_decimal_comma() {
        assert_eq!(format_percent(0.75), "75%");
        assert_eq!(format_percent(0.275), "27,5%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
