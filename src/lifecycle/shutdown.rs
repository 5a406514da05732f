//! Shutdown coordination between signal handling and the HTTP server.
//!
//! `main` owns a single `Shutdown`. `HttpServer::run` holds one receiver and,
//! when it fires, stops accepting connections and lets in-flight upstream
//! calls finish. Integration tests trigger it directly to stop the gateways
//! they start.

use tokio::sync::broadcast;

use crate::lifecycle::signals::wait_for_signal;

pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Start draining. A no-op once every server has already stopped.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Block until SIGINT/SIGTERM, then start draining.
    pub async fn trigger_on_signal(&self) {
        wait_for_signal().await;
        self.trigger();
    }

    /// True once every server holding a receiver has returned.
    pub fn is_drained(&self) -> bool {
        self.tx.receiver_count() == 0
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
