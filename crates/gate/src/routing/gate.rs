//! Host gate verdicts
//!
//! A host is admitted when it is on the allow-list or, with subdomain matching
//! enabled, when its subdomain passes the configured validator.

use std::sync::Arc;

use super::allow_list::AllowList;
use super::subdomain::{extract_subdomain, resolve_domain};
use super::validator::{SubdomainValidator, ValidatorRegistry};
use crate::config::{GateConfig, GateParams};
use crate::error::GateResult;

/// Allow/deny decision procedure for requested hosts
#[derive(Clone)]
pub struct HostGate {
    config: GateConfig,
    subdomain_allowed: bool,
    validator_name: String,
    validator: Arc<dyn SubdomainValidator>,
}

impl HostGate {
    /// Build a gate, resolving the configured validator.
    ///
    /// Fails with `GateError::UnknownValidator` when the name is not
    /// registered, even if subdomain matching is disabled.
    pub fn new(
        config: GateConfig,
        params: GateParams,
        registry: &ValidatorRegistry,
    ) -> GateResult<Self> {
        let validator_name = params.validator_name().to_string();
        let validator = registry.resolve(&validator_name)?;

        Ok(Self {
            config,
            subdomain_allowed: params.subdomain_allowed,
            validator_name,
            validator,
        })
    }

    pub fn validator_name(&self) -> &str {
        &self.validator_name
    }

    /// Allow-list from the current configuration
    pub fn allow_list(&self) -> AllowList {
        AllowList::parse(&self.config.allowed_hosts, self.config.debug)
    }

    /// Domain for subdomain matching, defaulting to `server_name`
    pub fn domain(&self, server_name: &str) -> String {
        let server_name = self.config.server_name.as_deref().unwrap_or(server_name);
        resolve_domain(self.config.domain.as_deref(), server_name)
    }

    /// Verdict for `host` (already lowercased).
    ///
    /// `server_name` is the request's own host, used as the domain when none is
    /// configured. The book catalog is only consulted when the host is not on
    /// the allow-list and subdomain matching is enabled.
    pub async fn evaluate(&self, host: &str, server_name: &str) -> GateResult<bool> {
        if self.allow_list().is_whitelisted(host) {
            return Ok(true);
        }
        if !self.subdomain_allowed {
            return Ok(false);
        }

        self.is_allowed_subdomain(host, &self.domain(server_name)).await
    }

    async fn is_allowed_subdomain(&self, host: &str, domain: &str) -> GateResult<bool> {
        let Some(subdomain) = extract_subdomain(host, domain) else {
            return Ok(false);
        };

        let allowed = self.validator.validate(&subdomain).await?;
        tracing::debug!(
            host = %host,
            subdomain = %subdomain,
            validator = %self.validator_name,
            allowed,
            "Subdomain validated"
        );
        Ok(allowed)
    }
}

impl std::fmt::Debug for HostGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostGate")
            .field("config", &self.config)
            .field("subdomain_allowed", &self.subdomain_allowed)
            .field("validator_name", &self.validator_name)
            .finish()
    }
}
