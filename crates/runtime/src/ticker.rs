//! Gravity: a task that enqueues [`Request::Tick`] at a fixed period.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::actor::{Request, RuntimeState};

/// Run until the game is over, the actor stops, or the queue closes.
///
/// The first tick fires one full period after start.
pub async fn run_gravity(
    period: Duration,
    requests: mpsc::Sender<Request>,
    mut state: watch::Receiver<RuntimeState>,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        if state.borrow_and_update().snapshot.game_over {
            debug!("gravity stopped: game over");
            return;
        }

        tokio::select! {
            _ = interval.tick() => {
                if requests.send(Request::Tick).await.is_err() {
                    debug!("gravity stopped: queue closed");
                    return;
                }
            }
            changed = state.changed() => {
                if changed.is_err() {
                    debug!("gravity stopped: actor gone");
                    return;
                }
            }
        }
    }
}
