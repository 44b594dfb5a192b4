//! Services layer - Business logic
//!
//! Business logic shared by handlers. The only service this demo needs is
//! the placeholder password hasher used by the registration endpoints.

pub mod password;

pub use password::{pseudo_hash, PLACEHOLDER_HASH};
