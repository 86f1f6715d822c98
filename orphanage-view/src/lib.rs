//! Orphanage detail view
//!
//! Fetches one orphanage record by id and renders it: photo gallery,
//! description, static map, routes link and visiting hours.
//!
//! - [`controller`]: view state and the fetch/complete cycle
//! - [`render`]: pure state → [`Page`] function
//! - [`html`] / [`text`]: page serializers
//! - [`session`]: event loop driving a view on a tokio task

pub mod config;
pub mod controller;
pub mod error;
pub mod html;
pub mod logging;
pub mod map;
pub mod page;
pub mod render;
pub mod session;
pub mod text;

#[cfg(test)]
mod testing;

pub use config::ViewConfig;
pub use controller::{Completion, DetailState, DetailView, FetchOutcome, FetchTicket, LoadPhase};
pub use error::{ViewError, ViewResult};
pub use page::{DetailPage, Page, Thumbnail, WeekendNotice};
pub use render::{RenderConfig, render};
pub use session::{DetailSession, SessionHandle, ViewCommand};

// Re-export workspace crates for binaries and embedders
pub use orphanage_client;
pub use shared;
