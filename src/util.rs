// src/util.rs
//! Small value parsing helpers shared by the cache and the handle

/// Parse a hexadecimal number as written in PLSDK config files.
///
/// Accepts an optional `0x`/`0X` prefix or `h`/`H` suffix around one or
/// more hex digits, with surrounding whitespace ignored. Returns `None` for
/// anything else, including values wider than 64 bits.
pub fn parse_hex(text: &str) -> Option<u64> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let digits = digits
        .strip_suffix('h')
        .or_else(|| digits.strip_suffix('H'))
        .unwrap_or(digits);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u64::from_str_radix(digits, 16).ok()
}
