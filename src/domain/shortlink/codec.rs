//! Base-54 shortlink codec.
//!
//! The alphabet order is part of the public contract: every shortlink ever
//! handed out was produced with it, so it must never change.

use std::fmt;
use std::str::FromStr;

use super::ShortLinkError;

/// Symbol table; a symbol's position is its digit value.
pub const ALPHABET: &str = "0JbyY7pLxMVG6kjR-sCz4Fhl_Ttw2qgNX5ZQn9S1v8fc3PDdrKHBmW";

/// Number of symbols in [`ALPHABET`].
pub const BASE: u64 = 54;

/// Encoding never emits more than this many symbols.
pub const MAX_DIGITS: usize = 6;

/// Largest id that fits in [`MAX_DIGITS`] symbols (`54^6 - 1`).
pub const MAX_ENCODABLE: u64 = 54 * 54 * 54 * 54 * 54 * 54 - 1;

const SYMBOLS: &[u8] = ALPHABET.as_bytes();

/// Encodes an id as a shortlink, most significant symbol first.
///
/// Zero consumes no digits and encodes to the empty string.
pub fn encode(id: u64) -> Result<String, ShortLinkError> {
    let mut remaining = id;
    let mut digits = Vec::with_capacity(MAX_DIGITS);

    while remaining != 0 && digits.len() < MAX_DIGITS {
        digits.push(SYMBOLS[(remaining % BASE) as usize]);
        remaining /= BASE;
    }

    if remaining != 0 {
        return Err(ShortLinkError::EncodingOverflow { id });
    }

    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

/// Decodes a shortlink of any length back to its id.
pub fn decode(shortlink: &str) -> Result<u64, ShortLinkError> {
    shortlink.chars().try_fold(0u64, |id, symbol| {
        let digit = digit_value(symbol).ok_or(ShortLinkError::InvalidSymbol { symbol })?;
        id.checked_mul(BASE)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(ShortLinkError::DecodeOverflow)
    })
}

fn digit_value(symbol: char) -> Option<u64> {
    if !symbol.is_ascii() {
        return None;
    }
    SYMBOLS
        .iter()
        .position(|&s| s == symbol as u8)
        .map(|pos| pos as u64)
}

/// A shortlink string paired with the id it decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortLink {
    raw: String,
    id: u64,
}

impl ShortLink {
    /// Encodes an id into a shortlink.
    pub fn from_id(id: u64) -> Result<Self, ShortLinkError> {
        Ok(Self { raw: encode(id)?, id })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ShortLink {
    type Err = ShortLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            raw: s.to_string(),
            id: decode(s)?,
        })
    }
}

impl fmt::Display for ShortLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
