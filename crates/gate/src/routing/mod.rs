//! Host-based access control
//!
//! This module decides whether a request's host may be served:
//! - Allow-list: exact hostnames or the `*` wildcard
//! - Subdomains: `<slug>.<domain>` admitted when the slug passes a named validator

pub mod allow_list;
mod gate;
pub mod host;
pub mod subdomain;
pub mod validator;

pub use allow_list::{is_whitelisted, AllowList, DEBUG_FALLBACK_HOSTS, WILDCARD};
pub use gate::HostGate;
pub use host::{effective_host, RequestHost, X_FORWARDED_HOST};
pub use subdomain::{extract_subdomain, resolve_domain};
pub use validator::{
    is_allowed_subdomain, BookValidator, PredicateValidator, SubdomainValidator,
    ValidatorRegistry,
};
