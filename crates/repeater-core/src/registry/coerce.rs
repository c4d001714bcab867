//! Text ↔ value conversions for settings.
//!
//! Parsing is lenient by contract: a setting never fails to apply, it
//! degrades to `false` or `0`.

/// `"1"`, `"true"` or `"yes"` (the last two in any case) are `true`;
/// everything else is `false`.
pub fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

/// Best-effort decimal conversion.
///
/// Skips leading whitespace, accepts one optional sign, then reads digits up
/// to the first non-digit.  No digits yields `0`.  Out-of-range values
/// saturate at the `i32` bounds.
///
/// ```rust
/// use repeater_core::registry::coerce::parse_int;
///
/// assert_eq!(parse_int("1200ms"), 1200);
/// assert_eq!(parse_int("abc"), 0);
/// assert_eq!(parse_int("-5"), -5);
/// ```
pub fn parse_int(value: &str) -> i32 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = acc * 10 + i64::from(b - b'0');
        if acc > i64::from(i32::MAX) + 1 {
            // Far enough past the bound; the result saturates either way.
            break;
        }
    }
    let signed = if negative { -acc } else { acc };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Like [`parse_int`], but a value starting with `0x` is read as base 16.
///
/// Hex digits after the prefix are read up to the first non-hex character and
/// wrap into 32 bits, so the two's-complement text written by
/// [`format_hex_int`] reads back to the same negative number.
pub fn parse_hex_int(value: &str) -> i32 {
    match value.strip_prefix("0x") {
        Some(hex) => hex
            .chars()
            .map_while(|c| c.to_digit(16))
            .fold(0u32, |acc, d| acc.wrapping_mul(16).wrapping_add(d)) as i32,
        None => parse_int(value),
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// `0x` followed by lowercase hex digits.
pub fn format_hex_int(value: i32) -> String {
    format!("0x{value:x}")
}

/// Text with each `\r` and `\n` replaced by a space.
///
/// The file format has no escaping, so a record must always render as
/// exactly one physical line.
pub fn format_text(value: &str) -> String {
    value.replace(|c: char| c == '\r' || c == '\n', " ")
}
