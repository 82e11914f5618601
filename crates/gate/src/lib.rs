//! Host Gate
//!
//! Host-header access control for axum services. A request proceeds when its
//! effective host is on the configured allow-list or, with subdomain matching
//! enabled, when its subdomain names a book accepted by the configured
//! validator. Everything else is answered with 403.

pub mod books;
pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod security;
pub mod state;

pub use books::{BookLookup, MemoryBookStore, PgBookStore};
pub use config::{Config, GateConfig, GateParams};
pub use error::{ApiError, GateError, GateResult};
pub use routing::{HostGate, ValidatorRegistry};
pub use security::{host_gate_middleware, GateState};
pub use state::AppState;
