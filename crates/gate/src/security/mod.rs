//! Request admission middleware

mod host_gate;

pub use host_gate::{host_gate_middleware, GateState};
