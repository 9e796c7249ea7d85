//! Shortlinks - opaque short strings standing in for numeric row ids.
//!
//! Encoding is canonical and capped at six symbols; decoding is tolerant
//! of leading zero-symbols and accepts any length.

mod codec;
mod errors;

pub use codec::{decode, encode, ShortLink, ALPHABET, BASE, MAX_DIGITS, MAX_ENCODABLE};
pub use errors::ShortLinkError;
