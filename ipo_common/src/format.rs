//! Display formatting for dashboard cells.
//!
//! None of these functions fail: anything that cannot be interpreted is shown
//! either verbatim or as the `--` placeholder.
use chrono::{DateTime, TimeZone};
use serde_json::Value;

/// Placeholder shown for missing or meaningless quantities.
pub const PLACEHOLDER: &str = "--";
/// Text shown for an explicit JSON `null` value.
pub const NOT_AVAILABLE: &str = "N/A";

const MAX_FRACTION_DIGITS: usize = 3;

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace.
///
/// Trailing garbage is ignored, so `"12.5 Cr"` yields `12.5`. Returns `None`
/// when no digits start the string. `Infinity` with an optional sign is
/// recognised; `NaN` is not.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a numeric-as-string quantity with Indian digit grouping.
///
/// - absent or empty → `--`
/// - not a number → the raw string
/// - otherwise grouped as `12,34,567`, with up to three fraction digits
pub fn format_number(value: Option<&str>) -> String {
    match value {
        None | Some("") => PLACEHOLDER.to_string(),
        Some(raw) => match parse_leading_float(raw) {
            Some(number) => group_en_in(number),
            None => raw.to_string(),
        },
    }
}

/// Formats a subscription multiple: `"2.35"` → `"2.35x"`.
///
/// Zero, empty and unparseable values collapse to the placeholder. The raw
/// text is kept as-is otherwise, so the backend's precision is preserved.
pub fn format_times(raw: &str) -> String {
    match parse_leading_float(raw) {
        Some(times) if times != 0.0 => format!("{}x", raw),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Turns a camelCase identifier into a label: `issueSize` → `Issue Size`.
pub fn format_field_name(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders an arbitrary JSON value as display text.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Renders an RFC 3339 timestamp as `16 Oct 2026, 02:30 pm` in `tz`.
///
/// Input that does not parse is returned unchanged.
pub fn format_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format("%-d %b %Y, %I:%M %P")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

fn group_en_in(number: f64) -> String {
    if number.is_infinite() {
        return if number < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let (int_part, frac) = round_fraction(number.abs());

    let mut out = String::with_capacity(int_part.len() * 2 + frac.len() + 2);
    if number.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_indian(&int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Rounds the shortest decimal form of `value` to [`MAX_FRACTION_DIGITS`],
/// ties away from zero. Returns the integer digits and the fraction digits
/// without trailing zeros.
fn round_fraction(value: f64) -> (String, String) {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));
    if frac_part.len() <= MAX_FRACTION_DIGITS {
        return (
            int_part.to_string(),
            frac_part.trim_end_matches('0').to_string(),
        );
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(MAX_FRACTION_DIGITS))
        .collect();
    if frac_part.as_bytes()[MAX_FRACTION_DIGITS] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - MAX_FRACTION_DIGITS);
    let frac: String = frac_digits.iter().map(|&d| char::from(d)).collect();
    (
        int_digits.iter().map(|&d| char::from(d)).collect(),
        frac.trim_end_matches('0').to_string(),
    )
}

/// Groups a digit run as lakh/crore: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    #[test]
    fn leading_float_ignores_trailing_text() {
        assert_eq!(parse_leading_float("12.5 Cr"), Some(12.5));
        assert_eq!(parse_leading_float("  42"), Some(42.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("-3e2x"), Some(-300.0));
        assert_eq!(parse_leading_float("7e"), Some(7.0));
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn leading_float_rejects_non_numbers() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("NaN"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
    }

    #[test]
    fn number_uses_indian_grouping() {
        assert_eq!(format_number(Some("1234567")), "12,34,567");
        assert_eq!(format_number(Some("123")), "123");
        assert_eq!(format_number(Some("1000")), "1,000");
        assert_eq!(format_number(Some("100000")), "1,00,000");
        assert_eq!(format_number(Some("123456789")), "12,34,56,789");
        assert_eq!(format_number(Some("-98765")), "-98,765");
    }

    #[test]
    fn number_keeps_at_most_three_fraction_digits() {
        assert_eq!(format_number(Some("1234.5")), "1,234.5");
        assert_eq!(format_number(Some("1234.56789")), "1,234.568");
        assert_eq!(format_number(Some("10.000")), "10");
        assert_eq!(format_number(Some("0")), "0");
    }

    #[test]
    fn number_rounds_ties_away_from_zero() {
        assert_eq!(format_number(Some("1.0625")), "1.063");
        assert_eq!(format_number(Some("1234.5625")), "1,234.563");
        assert_eq!(format_number(Some("0.0625")), "0.063");
        assert_eq!(format_number(Some("-2.0625")), "-2.063");
        assert_eq!(format_number(Some("1.0624")), "1.062");
    }

    #[test]
    fn number_rounding_carries_into_integer_part() {
        assert_eq!(format_number(Some("0.9995")), "1");
        assert_eq!(format_number(Some("99999.9999")), "1,00,000");
        assert_eq!(format_number(Some("0.0001")), "0");
    }

    #[test]
    fn number_placeholder_and_passthrough() {
        assert_eq!(format_number(None), "--");
        assert_eq!(format_number(Some("")), "--");
        assert_eq!(format_number(Some("abc")), "abc");
        assert_eq!(format_number(Some("N/A")), "N/A");
    }

    #[test]
    fn times_suffix_or_placeholder() {
        assert_eq!(format_times("2.35"), "2.35x");
        assert_eq!(format_times("120.10"), "120.10x");
        assert_eq!(format_times("0"), "--");
        assert_eq!(format_times("0.00"), "--");
        assert_eq!(format_times(""), "--");
        assert_eq!(format_times("NaN"), "--");
    }

    #[test]
    fn field_names_split_on_capitals() {
        assert_eq!(format_field_name("issueSize"), "Issue Size");
        assert_eq!(format_field_name("cutOffTime"), "Cut Off Time");
        assert_eq!(format_field_name("symbol"), "Symbol");
        assert_eq!(format_field_name("URL"), "U R L");
        assert_eq!(format_field_name(""), "");
    }

    #[test]
    fn values_render_like_table_cells() {
        assert_eq!(format_value(&Value::Null), "N/A");
        assert_eq!(format_value(&json!(true)), "Yes");
        assert_eq!(format_value(&json!(false)), "No");
        assert_eq!(format_value(&json!("₹10")), "₹10");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!({"a": 1})), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn timestamps_render_in_given_zone() {
        assert_eq!(
            format_timestamp("2026-01-09T08:05:00.000Z", &Utc),
            "9 Jan 2026, 08:05 am"
        );
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(
            format_timestamp("2026-01-09T08:05:00Z", &ist),
            "9 Jan 2026, 01:35 pm"
        );
        assert_eq!(format_timestamp("yesterday", &Utc), "yesterday");
    }
}
