// ============================================================================
// Currency Registries
// Built-in ISO resolution and a runtime-registrable registry
// ============================================================================

use super::descriptor::{is_well_formed_code, CurrencyDescriptor};
use super::iso::IsoCurrency;
use crate::domain::config::RegistryConfig;
use crate::domain::errors::{MoneyError, MoneyResult};
use crate::interfaces::CurrencyRegistry;
use parking_lot::RwLock;
use std::collections::HashMap;

// ============================================================================
// ISO Registry
// ============================================================================

/// Resolves codes against the ISO table, with configurable overrides and
/// a generic fallback for well-formed codes outside the table.
#[derive(Debug, Clone, Default)]
pub struct IsoRegistry {
    config: RegistryConfig,
}

impl IsoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: RegistryConfig) -> MoneyResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl CurrencyRegistry for IsoRegistry {
    fn lookup(&self, code: &str) -> Option<CurrencyDescriptor> {
        self.config
            .override_for(code)
            .cloned()
            .or_else(|| IsoCurrency::from_code(code).map(IsoCurrency::descriptor))
    }

    fn resolve(&self, code: &str) -> MoneyResult<CurrencyDescriptor> {
        if let Some(descriptor) = self.lookup(code) {
            return Ok(descriptor);
        }

        if self.config.accept_unknown && is_well_formed_code(code) {
            tracing::warn!(
                code,
                fraction_digits = self.config.fallback_fraction_digits,
                "currency not in registry, using generic descriptor"
            );
            return Ok(CurrencyDescriptor::new(
                code,
                self.config.fallback_fraction_digits,
            ));
        }

        Err(MoneyError::UnknownCurrency(code.to_string()))
    }
}

// ============================================================================
// Simple (Runtime) Registry
// ============================================================================

/// Registry populated at runtime. Shared across threads behind a lock;
/// registration is idempotent for identical descriptors.
#[derive(Debug, Default)]
pub struct SimpleCurrencyRegistry {
    descriptors: RwLock<HashMap<String, CurrencyDescriptor>>,
}

impl SimpleCurrencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated with every entry of the ISO table.
    pub fn with_iso_defaults() -> Self {
        let descriptors = IsoCurrency::ALL
            .iter()
            .map(|iso| (iso.code().to_string(), iso.descriptor()))
            .collect();
        Self {
            descriptors: RwLock::new(descriptors),
        }
    }

    /// Register a descriptor, returning the stored one.
    ///
    /// # Errors
    /// - `UnknownCurrency` if the code is not three uppercase letters
    /// - `RegistrationConflict` if the code is registered with different
    ///   fraction digits
    pub fn register(&self, descriptor: CurrencyDescriptor) -> MoneyResult<CurrencyDescriptor> {
        if !is_well_formed_code(&descriptor.code) {
            return Err(MoneyError::UnknownCurrency(descriptor.code));
        }

        let mut descriptors = self.descriptors.write();
        if let Some(existing) = descriptors.get(&descriptor.code) {
            if *existing == descriptor {
                return Ok(existing.clone());
            }
            return Err(MoneyError::RegistrationConflict(descriptor.code));
        }

        tracing::info!(
            code = %descriptor.code,
            fraction_digits = descriptor.fraction_digits,
            "registered currency"
        );
        descriptors.insert(descriptor.code.clone(), descriptor.clone());
        Ok(descriptor)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.descriptors.read().contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.descriptors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.read().is_empty()
    }
}

impl CurrencyRegistry for SimpleCurrencyRegistry {
    fn lookup(&self, code: &str) -> Option<CurrencyDescriptor> {
        self.descriptors.read().get(code).cloned()
    }
}
