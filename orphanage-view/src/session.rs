//! Event-loop session
//!
//! Runs one [`DetailView`] on its own task. Navigation and selection come
//! in as commands; fetches run on spawned tasks and report back through a
//! second channel, so the loop never waits on the network. Every state
//! change publishes a fresh [`Page`] on a watch channel.

use std::sync::Arc;

use orphanage_client::OrphanageSource;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::controller::{DetailView, FetchOutcome};
use crate::error::{ViewError, ViewResult};
use crate::page::Page;
use crate::render::RenderConfig;

/// Commands accepted by a running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Route changed to a new identifier
    Navigate(String),
    SelectImage(usize),
    /// Navigation away: drop all state
    Close,
}

/// Caller side of a session
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<ViewCommand>,
    pages: watch::Receiver<Page>,
}

impl SessionHandle {
    fn send(&self, command: ViewCommand) -> ViewResult<()> {
        self.commands
            .send(command)
            .map_err(|_| ViewError::SessionClosed)
    }

    pub fn navigate(&self, identifier: impl Into<String>) -> ViewResult<()> {
        self.send(ViewCommand::Navigate(identifier.into()))
    }

    pub fn select_image(&self, index: usize) -> ViewResult<()> {
        self.send(ViewCommand::SelectImage(index))
    }

    pub fn close(&self) -> ViewResult<()> {
        self.send(ViewCommand::Close)
    }

    /// Latest published page
    pub fn current(&self) -> Page {
        self.pages.borrow().clone()
    }

    /// Wait until the published page satisfies `predicate`
    pub async fn wait_for(&self, predicate: impl FnMut(&Page) -> bool) -> ViewResult<Page> {
        let mut pages = self.pages.clone();
        let page = pages
            .wait_for(predicate)
            .await
            .map_err(|_| ViewError::SessionClosed)?;
        Ok(page.clone())
    }
}

/// Detail view driven by an event loop
pub struct DetailSession<S: ?Sized> {
    view: DetailView<S>,
    config: RenderConfig,
    commands: mpsc::UnboundedReceiver<ViewCommand>,
    outcomes_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    pages: watch::Sender<Page>,
}

impl<S: OrphanageSource + ?Sized + 'static> DetailSession<S> {
    /// Start a session on the current tokio runtime
    pub fn spawn(source: Arc<S>, config: RenderConfig) -> (SessionHandle, JoinHandle<()>) {
        let (commands_tx, commands) = mpsc::unbounded_channel();
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        let (pages, pages_rx) = watch::channel(Page::Loading);

        let session = Self {
            view: DetailView::new(source),
            config,
            commands,
            outcomes_tx,
            outcomes_rx,
            pages,
        };
        let task = tokio::spawn(session.run());

        (
            SessionHandle {
                commands: commands_tx,
                pages: pages_rx,
            },
            task,
        )
    }

    async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(ViewCommand::Close) | None => break,
                    Some(command) => self.handle_command(command),
                },
                Some(outcome) = self.outcomes_rx.recv() => {
                    self.view.complete(outcome);
                }
            }
            self.publish();
        }
        tracing::debug!("Detail session closed");
    }

    fn handle_command(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Navigate(identifier) => {
                if let Some(ticket) = self.view.initialize(&identifier) {
                    let source = self.view.source().clone();
                    let outcomes = self.outcomes_tx.clone();
                    tokio::spawn(async move {
                        let outcome = ticket.fetch(&*source).await;
                        // Receiver gone means the session closed; nothing to apply
                        let _ = outcomes.send(outcome);
                    });
                }
            }
            ViewCommand::SelectImage(index) => {
                if let Err(e) = self.view.select_image(index) {
                    tracing::debug!(error = %e, "Ignoring image selection");
                }
            }
            ViewCommand::Close => {}
        }
    }

    fn publish(&self) {
        let page = self.view.render(&self.config);
        self.pages.send_if_modified(|current| {
            if *current == page {
                false
            } else {
                *current = page;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeSource, sample_orphanage};
    use std::time::Duration;

    #[tokio::test]
    async fn test_session_publishes_detail_after_navigate() {
        let source = Arc::new(FakeSource::new().with_record("1", sample_orphanage()));
        let (handle, task) = DetailSession::spawn(source.clone(), RenderConfig::default());

        assert!(handle.current().is_loading());
        handle.navigate("1").unwrap();
        let page = handle.wait_for(|p| !p.is_loading()).await.unwrap();
        assert_eq!(page.detail().unwrap().name, "Lar das meninas");

        handle.select_image(1).unwrap();
        let page = handle
            .wait_for(|p| p.detail().is_some_and(|d| d.active_thumbnail().map(|t| t.index) == Some(1)))
            .await
            .unwrap();
        assert_eq!(page.detail().unwrap().primary_image.as_ref().unwrap().src, "b");

        handle.close().unwrap();
        task.await.unwrap();
        assert_eq!(source.requests(), vec!["1".to_string()]);
    }

    #[tokio::test]
    async fn test_session_failed_fetch_stays_loading() {
        let source = Arc::new(FakeSource::new().with_record("1", sample_orphanage()));
        let (handle, task) = DetailSession::spawn(source.clone(), RenderConfig::default());

        handle.navigate("404").unwrap();
        tokio::time::timeout(Duration::from_secs(1), async {
            while source.requests().is_empty() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        // Let the failed outcome reach the loop
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(handle.current().is_loading());
        assert_eq!(source.requests(), vec!["404".to_string()]);

        // Same identifier again: no retry
        handle.navigate("404").unwrap();
        handle.navigate("1").unwrap();
        let page = handle.wait_for(|p| !p.is_loading()).await.unwrap();
        assert_eq!(page.detail().unwrap().name, "Lar das meninas");
        assert_eq!(source.requests(), vec!["404".to_string(), "1".to_string()]);

        handle.close().unwrap();
        task.await.unwrap();
        assert!(matches!(handle.navigate("2"), Err(ViewError::SessionClosed)));
    }

    #[tokio::test]
    async fn test_session_ends_when_handle_dropped() {
        let source = Arc::new(FakeSource::new());
        let (handle, task) = DetailSession::spawn(source, RenderConfig::default());
        drop(handle);
        task.await.unwrap();
    }
}
