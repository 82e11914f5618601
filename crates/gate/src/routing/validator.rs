//! Named subdomain validators
//!
//! A validator decides whether a subdomain label is acceptable. Validators are
//! registered under a name; the gate is configured with that name and resolves
//! it once, when it is built.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use hostgate_shared::LookupError;

use super::subdomain::extract_subdomain;
use crate::books::BookLookup;
use crate::error::{GateError, GateResult};

/// Accepts any subdomain
pub const ALWAYS_TRUE: &str = "always_true";
/// Exactly one book with the subdomain as slug
pub const RECORD_EXISTS: &str = "record_exists";
/// Exactly one book with the subdomain as slug and its flag set
pub const RECORD_EXISTS_WITH_FLAG: &str = "record_exists_with_flag";

/// Validator used when none is configured
pub const DEFAULT_VALIDATOR: &str = RECORD_EXISTS;

/// Predicate over a subdomain label
pub trait SubdomainValidator: Send + Sync {
    fn validate<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, Result<bool, LookupError>>;
}

/// Wraps a synchronous predicate
pub struct PredicateValidator<F>(pub F);

impl<F> SubdomainValidator for PredicateValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, Result<bool, LookupError>> {
        let allowed = (self.0)(slug);
        Box::pin(async move { Ok(allowed) })
    }
}

/// Checks the label against the book catalog
pub struct BookValidator {
    lookup: Arc<dyn BookLookup>,
    require_flag: bool,
}

impl BookValidator {
    pub fn new(lookup: Arc<dyn BookLookup>, require_flag: bool) -> Self {
        Self {
            lookup,
            require_flag,
        }
    }
}

impl SubdomainValidator for BookValidator {
    fn validate<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, Result<bool, LookupError>> {
        self.lookup.exists(slug, self.require_flag)
    }
}

/// Name-to-validator registry
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: BTreeMap<String, Arc<dyn SubdomainValidator>>,
}

impl ValidatorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in validators, backed by `lookup`
    pub fn with_builtins(lookup: Arc<dyn BookLookup>) -> Self {
        let mut registry = Self::new();
        registry.register(ALWAYS_TRUE, PredicateValidator(|_: &str| true));
        registry.register(RECORD_EXISTS, BookValidator::new(lookup.clone(), false));
        registry.register(RECORD_EXISTS_WITH_FLAG, BookValidator::new(lookup, true));
        registry
    }

    /// Add or replace a validator
    pub fn register<V>(&mut self, name: impl Into<String>, validator: V) -> &mut Self
    where
        V: SubdomainValidator + 'static,
    {
        self.validators.insert(name.into(), Arc::new(validator));
        self
    }

    pub fn resolve(&self, name: &str) -> GateResult<Arc<dyn SubdomainValidator>> {
        self.validators
            .get(name)
            .cloned()
            .ok_or_else(|| GateError::UnknownValidator(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.validators.keys().map(String::as_str).collect()
    }
}

/// Whether `host` is a subdomain of `domain` accepted by the named validator.
///
/// Hosts without a subdomain are `Ok(false)` without consulting the registry.
pub async fn is_allowed_subdomain(
    host: &str,
    domain: &str,
    validator_name: &str,
    registry: &ValidatorRegistry,
) -> GateResult<bool> {
    let Some(subdomain) = extract_subdomain(host, domain) else {
        return Ok(false);
    };

    let validator = registry.resolve(validator_name)?;
    Ok(validator.validate(&subdomain).await?)
}
