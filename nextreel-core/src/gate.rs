//! Signal filter & gate: decides which playback stops are worth acting on.
//!
//! Pure function of the configuration snapshot and the event; no I/O, no
//! mutation. Everything it rejects is a silent drop (debug trace only),
//! never an error.

use tracing::debug;

use nextreel_model::{Movie, UserID};

use crate::config::AutoQueueConfig;
use crate::events::PlaybackStopped;

/// Why a playback stop was dropped at the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    /// The stopped item is not a movie.
    NotAMovie,
    /// Auto-queue is switched off in configuration.
    Disabled,
    /// The user did not watch enough of the movie.
    BelowThreshold { watched: f64, required: u8 },
}

/// Gate decision for one playback stop.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    Proceed { movie: Movie, user_id: UserID },
    Drop(DropReason),
}

impl GateOutcome {
    pub fn is_drop(&self) -> bool {
        matches!(self, GateOutcome::Drop(_))
    }
}

/// Evaluate one playback stop against the current configuration.
///
/// The watch threshold is inclusive: a movie watched exactly
/// `required_watch_percentage` percent passes.
pub fn evaluate(
    config: &AutoQueueConfig,
    event: &PlaybackStopped,
) -> GateOutcome {
    let Some(movie) = event.item.as_movie() else {
        debug!(
            item = %event.item.item_uuid(),
            "ignoring playback stop for non-movie item"
        );
        return GateOutcome::Drop(DropReason::NotAMovie);
    };

    if !config.enable_auto_queue {
        debug!(movie = %movie.name, "auto-queue disabled, ignoring playback stop");
        return GateOutcome::Drop(DropReason::Disabled);
    }

    let watched = event.watched_percentage();
    let required = config.required_watch_percentage;
    if watched < f64::from(required) {
        debug!(
            movie = %movie.name,
            watched,
            required,
            "movie not watched far enough, not queuing next"
        );
        return GateOutcome::Drop(DropReason::BelowThreshold {
            watched,
            required,
        });
    }

    GateOutcome::Proceed {
        movie: movie.clone(),
        user_id: event.user_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextreel_model::{ItemID, MediaItem, MediaKind, MovieID};

    fn movie_stop(percentage: Option<f64>) -> PlaybackStopped {
        PlaybackStopped {
            item: MediaItem::Movie(Movie::new(MovieID::new(), "Heat")),
            user_id: UserID::new(),
            session_id: "session-1".to_string(),
            played_percentage: percentage,
        }
    }

    #[test]
    fn non_movie_items_are_dropped() {
        let event = PlaybackStopped {
            item: MediaItem::Other {
                id: ItemID::new(),
                kind: MediaKind::Episode,
            },
            user_id: UserID::new(),
            session_id: "session-1".to_string(),
            played_percentage: Some(100.0),
        };
        let outcome = evaluate(&AutoQueueConfig::default(), &event);
        assert_eq!(outcome, GateOutcome::Drop(DropReason::NotAMovie));
    }

    #[test]
    fn disabled_config_drops_everything() {
        let config = AutoQueueConfig {
            enable_auto_queue: false,
            ..AutoQueueConfig::default()
        };
        let outcome = evaluate(&config, &movie_stop(Some(100.0)));
        assert_eq!(outcome, GateOutcome::Drop(DropReason::Disabled));
    }

    #[test]
    fn under_watched_movies_are_dropped() {
        let outcome =
            evaluate(&AutoQueueConfig::default(), &movie_stop(Some(79.9)));
        assert!(outcome.is_drop());
        assert!(matches!(
            outcome,
            GateOutcome::Drop(DropReason::BelowThreshold { .. })
        ));
    }

    #[test]
    fn threshold_is_inclusive() {
        let outcome =
            evaluate(&AutoQueueConfig::default(), &movie_stop(Some(80.0)));
        assert!(!outcome.is_drop());
        assert!(matches!(outcome, GateOutcome::Proceed { .. }));
    }

    #[test]
    fn unknown_percentage_counts_as_zero() {
        let outcome = evaluate(&AutoQueueConfig::default(), &movie_stop(None));
        assert!(matches!(
            outcome,
            GateOutcome::Drop(DropReason::BelowThreshold {
                watched,
                required: 80,
            }) if watched == 0.0
        ));
    }

    #[test]
    fn zero_threshold_passes_unknown_percentage() {
        let config = AutoQueueConfig {
            required_watch_percentage: 0,
            ..AutoQueueConfig::default()
        };
        let outcome = evaluate(&config, &movie_stop(None));
        assert!(matches!(outcome, GateOutcome::Proceed { .. }));
    }
}
