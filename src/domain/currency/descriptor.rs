// ============================================================================
// Currency Descriptor
// ISO code plus minor-unit metadata, as handed out by a registry
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Registry record for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyDescriptor {
    /// ISO 4217 alphabetic code
    pub code: String,

    /// Digits after the decimal point in the currency's minor unit
    pub fraction_digits: u8,
}

impl CurrencyDescriptor {
    pub fn new(code: impl Into<String>, fraction_digits: u8) -> Self {
        Self {
            code: code.into(),
            fraction_digits,
        }
    }
}

impl fmt::Display for CurrencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Three ASCII uppercase letters.
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
