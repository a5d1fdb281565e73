//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `flow`, `alerts`) so individual
//! components can depend on small focused models. Each model is a plain
//! struct held in an `RwSignal` provided via context; all mutation goes
//! through the action functions in these modules.

pub mod alerts;
pub mod flow;
pub mod session;

#[cfg(test)]
pub(crate) mod test_api;
