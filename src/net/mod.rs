//! Network layer: wire types, error taxonomy, the HTTP gateway, and the
//! typed service traits the rest of the client calls through.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
