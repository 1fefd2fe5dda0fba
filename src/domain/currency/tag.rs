// ============================================================================
// Currency Tags
// Compile-time currency markers and the runtime-checked AnyCurrency
// ============================================================================

use super::descriptor::CurrencyDescriptor;
use super::iso::IsoCurrency;
use super::registry::IsoRegistry;
use crate::domain::errors::{MoneyError, MoneyResult};
use crate::interfaces::CurrencyRegistry;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use super::descriptor::is_well_formed_code;
#[cfg(feature = "serde")]
use crate::domain::config::MAX_FRACTION_DIGITS;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifies the currency of a [`Money`](crate::domain::Money) value.
///
/// Two tags denote the same currency when their codes are equal, whatever
/// their Rust types.
pub trait Currency: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// ISO 4217 alphabetic code.
    fn code(&self) -> &str;

    /// Digits after the decimal point in the minor unit.
    fn fraction_digits(&self) -> u8;

    fn descriptor(&self) -> CurrencyDescriptor {
        CurrencyDescriptor::new(self.code(), self.fraction_digits())
    }

    fn same_currency<O: Currency>(&self, other: &O) -> bool {
        self.code() == other.code()
    }
}

/// A currency fixed at compile time by a zero-sized marker type.
///
/// Markers are generated from the ISO table, so `Money<USD>` and
/// `Money<EUR>` are different types and cannot be mixed by accident.
pub trait StaticCurrency: Currency + Copy + Default + Eq + Hash {
    const ISO: IsoCurrency;

    fn instance() -> Self {
        Self::default()
    }

    /// Accept a descriptor only if it names this marker's currency.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the codes differ.
    fn from_descriptor(descriptor: &CurrencyDescriptor) -> MoneyResult<Self> {
        if descriptor.code == Self::ISO.code() {
            Ok(Self::default())
        } else {
            Err(MoneyError::mismatch(Self::ISO.code(), &descriptor.code))
        }
    }

    /// Look the marker's code up in `registry` (no fallback) and validate it.
    ///
    /// # Errors
    /// Returns `MissingDescriptor` if the registry has no entry for the code.
    fn from_registry<R: CurrencyRegistry + ?Sized>(registry: &R) -> MoneyResult<Self> {
        let descriptor = registry
            .lookup(Self::ISO.code())
            .ok_or_else(|| MoneyError::MissingDescriptor(Self::ISO.code().to_string()))?;
        Self::from_descriptor(&descriptor)
    }
}

/// Fail with `CurrencyMismatch` unless both tags name the same currency.
pub(crate) fn ensure_same_currency<A: Currency, B: Currency>(left: &A, right: &B) -> MoneyResult<()> {
    if left.same_currency(right) {
        Ok(())
    } else {
        tracing::debug!(
            left = left.code(),
            right = right.code(),
            "rejected cross-currency operation"
        );
        Err(MoneyError::mismatch(left.code(), right.code()))
    }
}

// ============================================================================
// AnyCurrency
// ============================================================================

/// Currency resolved at runtime, for interop and type-erased paths.
///
/// Every operation mixing `AnyCurrency` values is checked when it runs;
/// use [`Money::narrow`](crate::domain::Money::narrow) to move back to a
/// compile-time marker. Equality and hashing look at the code only, so
/// two registries that disagree on minor units still agree on identity.
#[derive(Debug, Clone)]
pub struct AnyCurrency {
    descriptor: CurrencyDescriptor,
}

impl AnyCurrency {
    /// Resolve through the built-in ISO registry.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` for malformed codes.
    pub fn of(code: &str) -> MoneyResult<Self> {
        Self::resolve(code, &IsoRegistry::default())
    }

    /// Resolve through `registry`, which may fall back to a generic
    /// descriptor for well-formed codes it does not know.
    pub fn resolve<R: CurrencyRegistry + ?Sized>(code: &str, registry: &R) -> MoneyResult<Self> {
        registry.resolve(code).map(Self::from_descriptor)
    }

    /// Resolve through `registry` without any fallback.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the registry has no entry for `code`.
    pub fn strict<R: CurrencyRegistry + ?Sized>(code: &str, registry: &R) -> MoneyResult<Self> {
        registry
            .lookup(code)
            .map(Self::from_descriptor)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    pub fn from_descriptor(descriptor: CurrencyDescriptor) -> Self {
        Self { descriptor }
    }

    /// The ISO table entry, if the code is in the table.
    pub fn iso(&self) -> Option<IsoCurrency> {
        IsoCurrency::from_code(&self.descriptor.code)
    }
}

impl Currency for AnyCurrency {
    fn code(&self) -> &str {
        &self.descriptor.code
    }

    fn fraction_digits(&self) -> u8 {
        self.descriptor.fraction_digits
    }

    fn descriptor(&self) -> CurrencyDescriptor {
        self.descriptor.clone()
    }
}

impl From<IsoCurrency> for AnyCurrency {
    fn from(iso: IsoCurrency) -> Self {
        Self::from_descriptor(iso.descriptor())
    }
}

impl PartialEq for AnyCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.code == other.descriptor.code
    }
}

impl Eq for AnyCurrency {}

impl Hash for AnyCurrency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptor.code.hash(state);
    }
}

impl fmt::Display for AnyCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor.code)
    }
}

// ============================================================================
// Serde
// ============================================================================

// A currency whose digits match its ISO table entry travels as its bare code,
// the same shape the typed markers use. Anything else keeps its digits.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AnyCurrencyRepr {
    Code(String),
    Descriptor(CurrencyDescriptor),
}

#[cfg(feature = "serde")]
impl Serialize for AnyCurrency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let is_default = self
            .iso()
            .is_some_and(|iso| iso.fraction_digits() == self.descriptor.fraction_digits);

        if is_default {
            serializer.serialize_str(&self.descriptor.code)
        } else {
            AnyCurrencyRepr::Descriptor(self.descriptor.clone()).serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AnyCurrency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match AnyCurrencyRepr::deserialize(deserializer)? {
            AnyCurrencyRepr::Code(code) => AnyCurrency::of(&code).map_err(serde::de::Error::custom),
            AnyCurrencyRepr::Descriptor(descriptor) => {
                if !is_well_formed_code(&descriptor.code) {
                    return Err(serde::de::Error::custom(MoneyError::UnknownCurrency(descriptor.code)));
                }
                if descriptor.fraction_digits > MAX_FRACTION_DIGITS {
                    return Err(serde::de::Error::custom(format!(
                        "{} has {} fraction digits, at most {} allowed",
                        descriptor.code, descriptor.fraction_digits, MAX_FRACTION_DIGITS
                    )));
                }
                Ok(AnyCurrency::from_descriptor(descriptor))
            }
        }
    }
}
