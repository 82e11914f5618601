//! Application state

use std::sync::Arc;

use sqlx::PgPool;

use crate::books::{BookLookup, MemoryBookStore, PgBookStore};
use crate::config::Config;
use crate::error::GateResult;
use crate::routing::{HostGate, ValidatorRegistry};
use crate::security::GateState;

/// Shared state for the server
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Catalog database; `None` when running on the in-memory store
    pub pool: Option<PgPool>,
    pub gate: GateState,
}

impl AppState {
    /// Build state over the PostgreSQL catalog
    pub fn with_pool(config: Config, pool: PgPool) -> GateResult<Self> {
        let lookup = Arc::new(PgBookStore::new(pool.clone()));
        Self::build(config, Some(pool), lookup)
    }

    /// Build state over an in-memory catalog
    pub fn with_memory_store(config: Config, store: Arc<MemoryBookStore>) -> GateResult<Self> {
        Self::build(config, None, store)
    }

    fn build(
        config: Config,
        pool: Option<PgPool>,
        lookup: Arc<dyn BookLookup>,
    ) -> GateResult<Self> {
        let registry = ValidatorRegistry::with_builtins(lookup);
        let gate = HostGate::new(config.gate.clone(), config.params.clone(), &registry)?;

        Ok(Self {
            config,
            pool,
            gate: GateState::new(gate),
        })
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.clone()
    }
}
