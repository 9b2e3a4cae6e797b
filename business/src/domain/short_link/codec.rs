//! Base-62 codec for recipe short links.
//!
//! Symbols are ordered `0-9`, `A-Z`, `a-z`; the most significant symbol comes
//! first. Zero encodes to `"0"` and no other value carries a leading zero.

use super::errors::ShortLinkError;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE: u64 = ALPHABET.len() as u64;

/// Encodes a non-negative integer as a base-62 token.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut symbols = Vec::new();
    while value > 0 {
        symbols.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    symbols.reverse();

    symbols.into_iter().map(char::from).collect()
}

/// Decodes a base-62 token back into the integer it was built from.
///
/// # Errors
/// Returns [`ShortLinkError::InvalidToken`] if the token is empty, contains a
/// symbol outside the alphabet, or does not fit in 64 bits.
pub fn decode(token: &str) -> Result<u64, ShortLinkError> {
    if token.is_empty() {
        return Err(ShortLinkError::InvalidToken);
    }

    token.bytes().try_fold(0u64, |acc, symbol| {
        let digit = symbol_value(symbol).ok_or(ShortLinkError::InvalidToken)?;
        acc.checked_mul(BASE)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(ShortLinkError::InvalidToken)
    })
}

fn symbol_value(symbol: u8) -> Option<u64> {
    let value = match symbol {
        b'0'..=b'9' => symbol - b'0',
        b'A'..=b'Z' => symbol - b'A' + 10,
        b'a'..=b'z' => symbol - b'a' + 36,
        _ => return None,
    };
    Some(u64::from(value))
}
