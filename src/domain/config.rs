// ============================================================================
// Registry Configuration
// How the built-in currency registry resolves codes it does not know
// ============================================================================

use super::currency::{is_well_formed_code, CurrencyDescriptor};
use super::errors::{MoneyError, MoneyResult};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction digits beyond this cannot be represented by `rust_decimal`
/// at API boundaries, so configs asking for more are rejected.
pub const MAX_FRACTION_DIGITS: u8 = 18;

/// Fraction digits assumed for well-formed codes missing from the table.
pub const DEFAULT_FALLBACK_FRACTION_DIGITS: u8 = 2;

// ============================================================================
// Registry Configuration
// ============================================================================

/// Configuration for [`IsoRegistry`](super::currency::IsoRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
    /// Fraction digits of the generic descriptor handed out for unknown codes
    pub fallback_fraction_digits: u8,

    /// Whether unknown but well-formed codes resolve to a generic descriptor.
    /// When false, resolution of unknown codes fails.
    pub accept_unknown: bool,

    /// Extra descriptors, or replacements for ISO table entries
    pub overrides: Vec<CurrencyDescriptor>,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self {
            fallback_fraction_digits: DEFAULT_FALLBACK_FRACTION_DIGITS,
            accept_unknown: true,
            overrides: Vec::new(),
        }
    }

    /// Builder method: Set fraction digits for the generic fallback
    pub fn with_fallback_fraction_digits(mut self, digits: u8) -> Self {
        self.fallback_fraction_digits = digits;
        self
    }

    /// Builder method: Toggle the generic fallback
    pub fn with_accept_unknown(mut self, accept: bool) -> Self {
        self.accept_unknown = accept;
        self
    }

    /// Builder method: Add or replace a descriptor
    pub fn with_override(mut self, descriptor: CurrencyDescriptor) -> Self {
        self.overrides.push(descriptor);
        self
    }

    pub fn override_for(&self, code: &str) -> Option<&CurrencyDescriptor> {
        self.overrides.iter().find(|descriptor| descriptor.code == code)
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        if self.fallback_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(MoneyError::InvalidConfig(format!(
                "fallback fraction digits {} exceed {}",
                self.fallback_fraction_digits, MAX_FRACTION_DIGITS
            )));
        }

        let mut seen = HashSet::with_capacity(self.overrides.len());
        for descriptor in &self.overrides {
            if !is_well_formed_code(&descriptor.code) {
                return Err(MoneyError::InvalidConfig(format!(
                    "override code '{}' is not three uppercase letters",
                    descriptor.code
                )));
            }
            if descriptor.fraction_digits > MAX_FRACTION_DIGITS {
                return Err(MoneyError::InvalidConfig(format!(
                    "override {} has {} fraction digits",
                    descriptor.code, descriptor.fraction_digits
                )));
            }
            if !seen.insert(descriptor.code.as_str()) {
                return Err(MoneyError::InvalidConfig(format!(
                    "duplicate override for {}",
                    descriptor.code
                )));
            }
        }

        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RegistryConfig {
    /// Only codes in the ISO table or the overrides resolve
    pub fn strict() -> Self {
        Self::new().with_accept_unknown(false)
    }

    /// Any well-formed code resolves; unknown ones get two fraction digits
    pub fn lenient() -> Self {
        Self::new()
    }
}
