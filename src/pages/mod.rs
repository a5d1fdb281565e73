//! Page-level views, one per route.

pub mod home;
pub mod login;
pub mod signup;
