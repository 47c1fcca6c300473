//! Per-view cancellation.
//!
//! A view wraps each request in [`ViewScope::run`]. Once the view is
//! unmounted, pending waits resolve to `None` and a result that lands
//! afterwards is dropped, so nothing writes into a dead view.

use std::future::Future;
use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct ViewScope {
    unmounted: Arc<watch::Sender<bool>>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        let (unmounted, _) = watch::channel(false);
        Self {
            unmounted: Arc::new(unmounted),
        }
    }

    pub fn is_mounted(&self) -> bool {
        !*self.unmounted.borrow()
    }

    /// Tear the view down. Idempotent, visible to every clone.
    pub fn unmount(&self) {
        if !self.unmounted.send_replace(true) {
            debug!("View scope unmounted");
        }
    }

    /// Drive `future` unless the scope is unmounted first.
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        let mut unmounted = self.unmounted.subscribe();
        if *unmounted.borrow() {
            return None;
        }

        tokio::select! {
            output = future => self.is_mounted().then_some(output),
            _ = unmounted.wait_for(|gone| *gone) => None,
        }
    }
}
