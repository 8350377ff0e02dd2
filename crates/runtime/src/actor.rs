//! The game actor and the handle used to talk to it.

use std::path::PathBuf;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::config::RuntimeConfig;
use crate::core::{Game, GameSnapshot};
use crate::error::{PersistError, RuntimeError};
use crate::persist::save_game;
use crate::ticker::run_gravity;
use crate::types::Command;

/// Message on the actor's queue.
#[derive(Debug)]
pub enum Request {
    /// Apply a player command. The reply, if any, receives whether the game
    /// changed (for [`Command::Save`], whether the save succeeded). Every
    /// command, save included, is refused once the game is over.
    Command {
        command: Command,
        reply: Option<oneshot::Sender<bool>>,
    },
    /// One gravity step.
    Tick,
    /// Export the current state to the configured path and report the
    /// outcome. Unlike [`Command::Save`] this works after game over.
    Save {
        reply: oneshot::Sender<Result<PathBuf, PersistError>>,
    },
    /// Stop the actor after everything queued before it.
    Shutdown,
}

/// Outcome of the most recent save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved(PathBuf),
    Failed(String),
}

impl SaveStatus {
    /// One-line message for the player.
    pub fn message(&self) -> String {
        match self {
            Self::Saved(path) => format!("Saved to {}", path.display()),
            Self::Failed(error) => format!("Save failed: {error}"),
        }
    }
}

/// What the actor publishes after every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeState {
    pub snapshot: GameSnapshot,
    pub last_save: Option<SaveStatus>,
    /// Gravity steps applied so far.
    pub ticks: u64,
}

/// Cloneable front-end side of the actor.
#[derive(Debug, Clone)]
pub struct GameHandle {
    requests: mpsc::Sender<Request>,
    state: watch::Receiver<RuntimeState>,
}

impl GameHandle {
    /// Queue a command without waiting for it to be applied.
    pub async fn submit(&self, command: Command) -> Result<(), RuntimeError> {
        self.send(Request::Command {
            command,
            reply: None,
        })
        .await
    }

    /// [`Self::submit`] for synchronous threads such as a keyboard reader.
    ///
    /// Must not be called from inside the async runtime.
    pub fn blocking_submit(&self, command: Command) -> Result<(), RuntimeError> {
        self.requests
            .blocking_send(Request::Command {
                command,
                reply: None,
            })
            .map_err(|_| RuntimeError::Closed)
    }

    /// Apply a command and wait until it has been processed.
    pub async fn command(&self, command: Command) -> Result<bool, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::Command {
            command,
            reply: Some(reply),
        })
        .await?;
        rx.await.map_err(|_| RuntimeError::Closed)
    }

    /// Save the game and return the path written.
    pub async fn save(&self) -> Result<PathBuf, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::Save { reply }).await?;
        Ok(rx.await.map_err(|_| RuntimeError::Closed)??)
    }

    /// Ask the actor to stop once the queue before this request drains.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.send(Request::Shutdown).await
    }

    /// Subscribe to published state.
    pub fn state(&self) -> watch::Receiver<RuntimeState> {
        self.state.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.borrow().snapshot
    }

    async fn send(&self, request: Request) -> Result<(), RuntimeError> {
        self.requests
            .send(request)
            .await
            .map_err(|_| RuntimeError::Closed)
    }
}

/// Tasks started by [`spawn`].
#[derive(Debug)]
pub struct RuntimeTasks {
    actor: JoinHandle<Game>,
    ticker: Option<JoinHandle<()>>,
}

impl RuntimeTasks {
    /// Whether the gravity task has exited (or was never started).
    pub fn gravity_stopped(&self) -> bool {
        self.ticker.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Stop gravity and wait for the actor to hand the game back.
    ///
    /// Gravity holds a queue sender of its own, so while it runs the actor
    /// exits only after [`GameHandle::shutdown`]. The ticker is aborted here
    /// first, after which dropping every handle also ends the actor.
    pub async fn join(self) -> Result<Game, RuntimeError> {
        if let Some(ticker) = self.ticker {
            ticker.abort();
            let _ = ticker.await;
        }
        self.actor.await.map_err(|_| RuntimeError::Panicked)
    }
}

/// Start the actor (and gravity, if configured) on the current runtime.
pub fn spawn(game: Game, config: RuntimeConfig) -> (GameHandle, RuntimeTasks) {
    let (requests, rx) = mpsc::channel(config.queue_capacity.max(1));
    let initial = RuntimeState {
        snapshot: game.snapshot(),
        last_save: None,
        ticks: 0,
    };
    let (state_tx, state) = watch::channel(initial);

    let actor = Actor {
        game,
        save_path: config.save_path,
        state: state_tx,
        ticks: 0,
        last_save: None,
    };
    let actor = tokio::spawn(actor.run(rx));

    let ticker = config
        .gravity
        .map(|period| tokio::spawn(run_gravity(period, requests.clone(), state.clone())));

    (GameHandle { requests, state }, RuntimeTasks { actor, ticker })
}

struct Actor {
    game: Game,
    save_path: PathBuf,
    state: watch::Sender<RuntimeState>,
    ticks: u64,
    last_save: Option<SaveStatus>,
}

impl Actor {
    async fn run(mut self, mut rx: mpsc::Receiver<Request>) -> Game {
        info!(save_path = %self.save_path.display(), "game actor started");

        while let Some(request) = rx.recv().await {
            match request {
                Request::Command {
                    command: Command::Save,
                    reply,
                } => {
                    let saved = !self.game.is_game_over() && self.save().await.is_ok();
                    if let Some(reply) = reply {
                        let _ = reply.send(saved);
                    }
                }
                Request::Command { command, reply } => {
                    let changed = self.game.apply(command);
                    trace!(command = command.as_str(), changed, "command");
                    if let Some(reply) = reply {
                        let _ = reply.send(changed);
                    }
                }
                Request::Tick => {
                    self.ticks += 1;
                    let outcome = self.game.tick();
                    trace!(?outcome, "tick");
                }
                Request::Save { reply } => {
                    let result = self.save().await;
                    let _ = reply.send(result);
                }
                Request::Shutdown => {
                    debug!("shutdown requested");
                    break;
                }
            }
            self.publish();
        }

        info!(
            lines_cleared = self.game.lines_cleared(),
            game_over = self.game.is_game_over(),
            "game actor stopped"
        );
        self.game
    }

    async fn save(&mut self) -> Result<PathBuf, PersistError> {
        let result = save_game(&self.game, &self.save_path)
            .await
            .map(|()| self.save_path.clone());
        self.last_save = Some(match &result {
            Ok(path) => SaveStatus::Saved(path.clone()),
            Err(err) => SaveStatus::Failed(err.to_string()),
        });
        result
    }

    fn publish(&self) {
        self.state.send_replace(RuntimeState {
            snapshot: self.game.snapshot(),
            last_save: self.last_save.clone(),
            ticks: self.ticks,
        });
    }
}
