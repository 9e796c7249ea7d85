//! Packed IV decoding.
//!
//! Six 5-bit fields packed into one integer, first stat in bits 25..=29 down
//! to the last stat in bits 0..=4. Bits 30 and 31 are ignored.

use serde::{Deserialize, Serialize};

/// Number of stats in a spread.
pub const IV_FIELD_COUNT: usize = 6;

/// Width of each packed field.
pub const IV_FIELD_BITS: u32 = 5;

/// Mask for a single field (`0b11111`).
pub const IV_FIELD_MASK: u32 = (1 << IV_FIELD_BITS) - 1;

/// Six IVs in stat order, each 0..=31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IvSpread([u8; IV_FIELD_COUNT]);

impl IvSpread {
    /// Unpacks a stored IV integer. Total: every input decodes.
    pub fn decode(packed: u32) -> Self {
        let mut values = [0u8; IV_FIELD_COUNT];
        for (i, value) in values.iter_mut().enumerate() {
            let shift = IV_FIELD_BITS * (IV_FIELD_COUNT - 1 - i) as u32;
            *value = ((packed >> shift) & IV_FIELD_MASK) as u8;
        }
        Self(values)
    }

    pub fn values(&self) -> [u8; IV_FIELD_COUNT] {
        self.0
    }

    /// Sum of all six IVs.
    pub fn total(&self) -> u16 {
        self.0.iter().map(|&v| u16::from(v)).sum()
    }
}
