//! Numeric literal parsing.
//!
//! The simulator prints values, addresses and encodings as text. All architectural
//! values are 32-bit; anything that does not fit is rejected rather than truncated.

/// Parses a hexadecimal literal with an optional `0x`/`0X` prefix.
///
/// # Arguments
///
/// * `text` - Literal such as `0x7ffffff0` or `00500513`.
///
/// # Returns
///
/// The value, or `None` if the text is empty, contains a non-hex digit, or exceeds 32 bits.
pub fn parse_hex(text: &str) -> Option<u32> {
    let digits = strip_hex_prefix(text.trim()).unwrap_or_else(|| text.trim());
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Parses an address literal: hexadecimal when `0x`-prefixed, decimal otherwise.
///
/// Predictor tables key their entries by program-counter text; both spellings occur.
pub fn parse_address(text: &str) -> Option<u32> {
    let text = text.trim();
    match strip_hex_prefix(text) {
        Some(digits) if !digits.is_empty() => u32::from_str_radix(digits, 16).ok(),
        Some(_) => None,
        None => text.parse().ok(),
    }
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}
