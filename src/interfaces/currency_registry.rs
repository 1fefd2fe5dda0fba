// ============================================================================
// Currency Registry Interface
// Contract for turning ISO codes into currency descriptors
// ============================================================================

use crate::domain::currency::CurrencyDescriptor;
use crate::domain::errors::{MoneyError, MoneyResult};

/// Source of currency descriptors.
///
/// `lookup` answers only what the registry actually knows. `resolve` may
/// add a fallback policy on top; the default has none.
pub trait CurrencyRegistry: Send + Sync {
    /// Descriptor for `code`, if registered.
    fn lookup(&self, code: &str) -> Option<CurrencyDescriptor>;

    /// Descriptor for `code`, applying the registry's fallback policy.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code cannot be resolved.
    fn resolve(&self, code: &str) -> MoneyResult<CurrencyDescriptor> {
        self.lookup(code)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for &R {
    fn lookup(&self, code: &str) -> Option<CurrencyDescriptor> {
        (**self).lookup(code)
    }

    fn resolve(&self, code: &str) -> MoneyResult<CurrencyDescriptor> {
        (**self).resolve(code)
    }
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for std::sync::Arc<R> {
    fn lookup(&self, code: &str) -> Option<CurrencyDescriptor> {
        (**self).lookup(code)
    }

    fn resolve(&self, code: &str) -> MoneyResult<CurrencyDescriptor> {
        (**self).resolve(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::{IsoRegistry, SimpleCurrencyRegistry};
    use std::sync::Arc;

    struct Fixed;

    impl CurrencyRegistry for Fixed {
        fn lookup(&self, code: &str) -> Option<CurrencyDescriptor> {
            (code == "AAA").then(|| CurrencyDescriptor::new("AAA", 1))
        }
    }

    #[test]
    fn test_default_resolve_has_no_fallback() {
        assert_eq!(Fixed.resolve("AAA"), Ok(CurrencyDescriptor::new("AAA", 1)));
        assert_eq!(
            Fixed.resolve("BBB"),
            Err(MoneyError::UnknownCurrency("BBB".to_string()))
        );
    }

    #[test]
    fn test_trait_objects_and_shared_handles() {
        let registries: Vec<Box<dyn CurrencyRegistry>> =
            vec![Box::new(IsoRegistry::new()), Box::new(SimpleCurrencyRegistry::with_iso_defaults())];
        for registry in &registries {
            assert_eq!(registry.resolve("EUR"), Ok(CurrencyDescriptor::new("EUR", 2)));
        }

        let shared = Arc::new(SimpleCurrencyRegistry::new());
        assert_eq!(shared.lookup("EUR"), None);
        shared.register(CurrencyDescriptor::new("EUR", 2)).unwrap();
        assert_eq!(fraction_digits_of(Arc::clone(&shared), "EUR"), Some(2));
        assert_eq!(fraction_digits_of(&Fixed, "AAA"), Some(1));
    }

    fn fraction_digits_of<R: CurrencyRegistry>(registry: R, code: &str) -> Option<u8> {
        registry.lookup(code).map(|d| d.fraction_digits)
    }
}
