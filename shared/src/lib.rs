//! Shared types for the orphanage detail view
//!
//! Record model and identifier types used by both the data-access
//! client and the view layer.

pub mod models;

// Re-exports
pub use models::{InvalidOrphanageId, Orphanage, OrphanageId, OrphanageImage};
