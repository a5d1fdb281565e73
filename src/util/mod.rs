//! Browser utilities and pure helpers shared across pages.

pub mod storage;
pub mod validation;
