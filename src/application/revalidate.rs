//! Revalidation signal raised after successful mutations.
//!
//! The presentation layer subscribes and re-fetches whatever the current view
//! depends on whenever the epoch moves.

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::debug;

#[async_trait]
pub trait Revalidator: Send + Sync {
    /// Ask every dependent view to re-fetch its data.
    async fn revalidate_all(&self);
}

/// Epoch counter broadcast over a `watch` channel.
#[derive(Debug)]
pub struct RevalidationHub {
    epoch: watch::Sender<u64>,
}

impl Default for RevalidationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl RevalidationHub {
    pub fn new() -> Self {
        let (epoch, _) = watch::channel(0);
        Self { epoch }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.epoch.subscribe()
    }

    /// Number of revalidations requested so far.
    pub fn epoch(&self) -> u64 {
        *self.epoch.borrow()
    }
}

#[async_trait]
impl Revalidator for RevalidationHub {
    async fn revalidate_all(&self) {
        self.epoch.send_modify(|epoch| *epoch += 1);
        debug!(epoch = self.epoch(), "revalidation requested");
    }
}
