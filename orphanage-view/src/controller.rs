//! Detail View Controller
//!
//! Owns the state of one detail page: which identifier is shown, the
//! fetched record (if any) and the selected image.
//!
//! A fetch is split in three steps so the caller decides where the await
//! happens:
//!
//! 1. [`DetailView::initialize`] hands out a [`FetchTicket`] tagged with the
//!    current generation;
//! 2. [`FetchTicket::fetch`] performs the request (the only await point);
//! 3. [`DetailView::complete`] applies the outcome, unless the identifier
//!    changed in the meantime, in which case the outcome is discarded.

use std::sync::Arc;

use orphanage_client::{ClientError, OrphanageSource};
use shared::{Orphanage, OrphanageId};

use crate::error::{ViewError, ViewResult};
use crate::page::Page;
use crate::render::{RenderConfig, render};

/// Fetch progress for the current identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No valid identifier
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Terminal for this identifier; presented like `Loading`
    Failed,
}

/// View state
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub identifier: Option<OrphanageId>,
    pub generation: u64,
    pub phase: LoadPhase,
    pub record: Option<Orphanage>,
    pub active_image_index: usize,
}

/// Permission to fetch one record for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: OrphanageId,
    pub generation: u64,
}

impl FetchTicket {
    /// Issue the request through the data-access collaborator
    pub async fn fetch<S: OrphanageSource + ?Sized>(self, source: &S) -> FetchOutcome {
        let result = source.fetch_by_id(&self.id).await;
        FetchOutcome {
            ticket: self,
            result,
        }
    }
}

/// Result of a fetch, still tagged with the ticket that issued it
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<Orphanage, ClientError>,
}

/// What [`DetailView::complete`] did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Loaded,
    Failed,
    /// Outcome belonged to a superseded identifier
    Discarded,
}

/// Detail view bound to a data-access collaborator
pub struct DetailView<S: ?Sized> {
    source: Arc<S>,
    state: DetailState,
}

impl<S: OrphanageSource + ?Sized> DetailView<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: DetailState::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn record(&self) -> Option<&Orphanage> {
        self.state.record.as_ref()
    }

    pub fn active_image_index(&self) -> usize {
        self.state.active_image_index
    }

    /// Mount or re-target the view
    ///
    /// Returns a ticket only when a request must be issued: the identifier
    /// is valid and differs from the one already shown.
    pub fn initialize(&mut self, identifier: &str) -> Option<FetchTicket> {
        let id = match OrphanageId::parse(identifier) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid orphanage id");
                self.reset(None, LoadPhase::Idle);
                return None;
            }
        };

        if self.state.identifier.as_ref() == Some(&id) {
            return None;
        }

        self.reset(Some(id.clone()), LoadPhase::Loading);
        tracing::debug!(id = %id, generation = self.state.generation, "Fetching orphanage");

        Some(FetchTicket {
            id,
            generation: self.state.generation,
        })
    }

    fn reset(&mut self, identifier: Option<OrphanageId>, phase: LoadPhase) {
        self.state.generation += 1;
        self.state.identifier = identifier;
        self.state.phase = phase;
        self.state.record = None;
        self.state.active_image_index = 0;
    }

    /// Apply a fetch outcome to the state
    pub fn complete(&mut self, outcome: FetchOutcome) -> Completion {
        let FetchOutcome { ticket, result } = outcome;

        if ticket.generation != self.state.generation
            || self.state.identifier.as_ref() != Some(&ticket.id)
        {
            tracing::debug!(
                id = %ticket.id,
                generation = ticket.generation,
                current = self.state.generation,
                "Discarding stale orphanage response"
            );
            return Completion::Discarded;
        }

        match result {
            Ok(record) => {
                tracing::info!(
                    id = %ticket.id,
                    name = %record.name,
                    images = record.images.len(),
                    open_on_weekends = record.open_on_weekends,
                    "Orphanage loaded"
                );
                self.state.record = Some(record);
                self.state.phase = LoadPhase::Loaded;
                Completion::Loaded
            }
            Err(e) => {
                tracing::error!(id = %ticket.id, error = %e, "Failed to fetch orphanage");
                self.state.phase = LoadPhase::Failed;
                Completion::Failed
            }
        }
    }

    /// Initialize, fetch and complete in one go
    pub async fn load(&mut self, identifier: &str) -> Option<Completion> {
        let ticket = self.initialize(identifier)?;
        let outcome = ticket.fetch(&*self.source).await;
        Some(self.complete(outcome))
    }

    /// Select the image shown at full size
    pub fn select_image(&mut self, index: usize) -> ViewResult<()> {
        let record = self.state.record.as_ref().ok_or(ViewError::NoRecord)?;
        let len = record.images.len();
        if index >= len {
            return Err(ViewError::ImageIndexOutOfRange { index, len });
        }
        self.state.active_image_index = index;
        Ok(())
    }

    pub fn render(&self, config: &RenderConfig) -> Page {
        render(&self.state, config)
    }
}
