//! Reusable UI components.

pub mod alert_stack;
pub mod protected;
