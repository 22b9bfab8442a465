//! Entrypoint wiring: subscribes to playback stops, runs the pipeline.
//!
//! One handler is subscribed at process start and released at shutdown via
//! [`HandlerGuard`]. Each accepted event runs as its own detached task so a
//! slow library scan never delays session teardown on the host side.

use std::fmt;
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::ConfigWatch;
use crate::events::{PlaybackEventBus, PlaybackStopped};
use crate::gate::{self, GateOutcome};
use crate::selector::AutoQueueService;

/// Playback event handler: gate, then selector, then commit.
///
/// Never reports an error back to the event source. Every failure is
/// absorbed into a log line and the triggering signal is dropped; the
/// subscription stays alive regardless.
pub struct PlaybackEventHandler {
    service: Arc<AutoQueueService>,
    config: Arc<ConfigWatch>,
}

impl fmt::Debug for PlaybackEventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackEventHandler").finish_non_exhaustive()
    }
}

impl PlaybackEventHandler {
    pub fn new(
        service: Arc<AutoQueueService>,
        config: Arc<ConfigWatch>,
    ) -> Self {
        Self { service, config }
    }

    /// Subscribe to the bus and start the listener task.
    ///
    /// The returned guard owns the subscription; dropping it (or calling
    /// [`HandlerGuard::stop`]) detaches the handler and no further events
    /// are processed.
    pub fn start(self, bus: &PlaybackEventBus) -> HandlerGuard {
        let mut receiver = bus.subscribe();
        let handle = tokio::spawn(async move {
            info!("playback event handler started");
            loop {
                match receiver.recv().await {
                    Ok(event) => self.handle(event),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "playback event stream lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            info!("playback event handler stopped: event source closed");
        });
        HandlerGuard { handle }
    }

    fn handle(&self, event: PlaybackStopped) {
        // Snapshot per event: a concurrent reload never changes the rules
        // mid-decision.
        let config = self.config.snapshot();
        let GateOutcome::Proceed { movie, user_id } =
            gate::evaluate(&config, &event)
        else {
            return;
        };

        info!(
            movie = %movie.name,
            "movie was fully watched, looking for next in series"
        );

        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            if let Err(err) =
                service.find_and_queue_next(&movie, user_id).await
            {
                error!(
                    error = %err,
                    movie = %movie.name,
                    user = %user_id,
                    "failed to queue next movie"
                );
            }
        });
    }
}

/// Scoped registration for the playback event handler.
///
/// Aborts the listener task when stopped or dropped, guaranteeing no
/// handler invocation after release. Pipeline runs already in flight are
/// left to finish.
#[derive(Debug)]
pub struct HandlerGuard {
    handle: JoinHandle<()>,
}

impl HandlerGuard {
    /// Detach the handler from the event source.
    pub fn stop(self) {
        self.handle.abort();
    }

    /// Whether the listener task has exited (source closed or aborted).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for HandlerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
