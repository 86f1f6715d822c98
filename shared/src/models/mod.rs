//! Data models
//!
//! Wire shapes returned by the orphanages API. Records are read-only on
//! the client side: they are fetched, displayed and dropped.

pub mod orphanage;

// Re-exports
pub use orphanage::*;
