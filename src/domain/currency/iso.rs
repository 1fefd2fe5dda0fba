// ============================================================================
// ISO Currency Table
// One table drives the enumeration and every compile-time marker type
// ============================================================================

use super::descriptor::CurrencyDescriptor;
use super::tag::{AnyCurrency, Currency, StaticCurrency};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! iso_table {
    ($( $variant:ident => ($digits:expr, $name:expr) ),+ $(,)?) => {
        /// ISO 4217 currencies known to the built-in registry.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum IsoCurrency {
            $( $variant, )+
        }

        impl IsoCurrency {
            pub const ALL: &'static [IsoCurrency] = &[$( IsoCurrency::$variant, )+];

            pub const fn code(self) -> &'static str {
                match self {
                    $( IsoCurrency::$variant => stringify!($variant), )+
                }
            }

            pub const fn fraction_digits(self) -> u8 {
                match self {
                    $( IsoCurrency::$variant => $digits, )+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( IsoCurrency::$variant => $name, )+
                }
            }
        }
    };
}

iso_table! {
    AED => (2, "UAE Dirham"),
    AUD => (2, "Australian Dollar"),
    BHD => (3, "Bahraini Dinar"),
    BRL => (2, "Brazilian Real"),
    CAD => (2, "Canadian Dollar"),
    CHF => (2, "Swiss Franc"),
    CLP => (0, "Chilean Peso"),
    CNY => (2, "Yuan Renminbi"),
    CZK => (2, "Czech Koruna"),
    DKK => (2, "Danish Krone"),
    EUR => (2, "Euro"),
    GBP => (2, "Pound Sterling"),
    HKD => (2, "Hong Kong Dollar"),
    HUF => (2, "Forint"),
    ILS => (2, "New Israeli Sheqel"),
    INR => (2, "Indian Rupee"),
    ISK => (0, "Iceland Krona"),
    JOD => (3, "Jordanian Dinar"),
    JPY => (0, "Yen"),
    KRW => (0, "Won"),
    KWD => (3, "Kuwaiti Dinar"),
    MXN => (2, "Mexican Peso"),
    NOK => (2, "Norwegian Krone"),
    NZD => (2, "New Zealand Dollar"),
    OMR => (3, "Rial Omani"),
    PLN => (2, "Zloty"),
    RON => (2, "Romanian Leu"),
    SEK => (2, "Swedish Krona"),
    SGD => (2, "Singapore Dollar"),
    THB => (2, "Baht"),
    TND => (3, "Tunisian Dinar"),
    TRY => (2, "Turkish Lira"),
    UGX => (0, "Uganda Shilling"),
    USD => (2, "US Dollar"),
    VND => (0, "Dong"),
    ZAR => (2, "Rand"),
}

impl IsoCurrency {
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|iso| iso.code() == code)
    }

    pub fn descriptor(self) -> CurrencyDescriptor {
        CurrencyDescriptor::new(self.code(), self.fraction_digits())
    }
}

impl fmt::Display for IsoCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Compile-Time Markers
// ============================================================================

macro_rules! typed_currencies {
    ($( $marker:ident ),+ $(,)?) => {
        $(
            #[doc = concat!("Compile-time marker for ", stringify!($marker), ".")]
            #[allow(clippy::upper_case_acronyms)]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl Currency for $marker {
                fn code(&self) -> &str {
                    Self::ISO.code()
                }

                fn fraction_digits(&self) -> u8 {
                    Self::ISO.fraction_digits()
                }
            }

            impl StaticCurrency for $marker {
                const ISO: IsoCurrency = IsoCurrency::$marker;
            }

            impl fmt::Display for $marker {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(Self::ISO.code())
                }
            }

            impl PartialEq<AnyCurrency> for $marker {
                fn eq(&self, other: &AnyCurrency) -> bool {
                    other.code() == Self::ISO.code()
                }
            }

            impl PartialEq<$marker> for AnyCurrency {
                fn eq(&self, _other: &$marker) -> bool {
                    self.code() == $marker::ISO.code()
                }
            }

            impl From<$marker> for AnyCurrency {
                fn from(_marker: $marker) -> Self {
                    AnyCurrency::from($marker::ISO)
                }
            }

            #[cfg(feature = "serde")]
            impl Serialize for $marker {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(Self::ISO.code())
                }
            }

            #[cfg(feature = "serde")]
            impl<'de> Deserialize<'de> for $marker {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let code = String::deserialize(deserializer)?;
                    $marker::from_descriptor(&CurrencyDescriptor::new(code, $marker::ISO.fraction_digits()))
                        .map_err(serde::de::Error::custom)
                }
            }
        )+

        /// Currencies that have a compile-time marker type.
        pub const TYPED_CURRENCIES: &[IsoCurrency] = &[$( IsoCurrency::$marker, )+];
    };
}

typed_currencies!(USD, EUR, GBP, CHF, PLN, CAD, CZK, HKD, HUF, ILS, JPY, BHD);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(IsoCurrency::from_code("USD"), Some(IsoCurrency::USD));
        assert_eq!(IsoCurrency::from_code("usd"), None);
        assert_eq!(IsoCurrency::from_code("XYZ"), None);
        assert_eq!(IsoCurrency::KWD.fraction_digits(), 3);
        assert_eq!(IsoCurrency::CLP.fraction_digits(), 0);
        assert_eq!(IsoCurrency::CHF.name(), "Swiss Franc");
    }

    #[test]
    fn test_codes_are_unique_and_well_formed() {
        let mut codes: Vec<&str> = IsoCurrency::ALL.iter().map(|iso| iso.code()).collect();
        assert!(codes.iter().all(|code| super::super::is_well_formed_code(code)));
        let before = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), before);
    }

    #[test]
    fn test_markers_match_table() {
        assert_eq!(EUR.code(), IsoCurrency::EUR.code());
        assert_eq!(BHD.fraction_digits(), 3);
        assert_eq!(HUF::ISO, IsoCurrency::HUF);
        assert_eq!(TYPED_CURRENCIES.len(), 12);
        assert_eq!(AnyCurrency::from(ILS).descriptor(), IsoCurrency::ILS.descriptor());
    }
}
