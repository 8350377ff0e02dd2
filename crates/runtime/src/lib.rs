//! Game runtime: one task owns the [`core::Game`].
//!
//! Front ends never touch the game directly. They send [`Request`]s through
//! a [`GameHandle`] onto a single bounded queue, and read published
//! [`RuntimeState`] values from a `watch` channel. Gravity is just another
//! producer on the same queue, so player input and ticks are applied in the
//! order they arrive.
//!
//! ```no_run
//! # async fn demo() -> Result<(), tetrion_runtime::RuntimeError> {
//! use tetrion_core::Game;
//! use tetrion_runtime::{spawn, RuntimeConfig};
//! use tetrion_types::Command;
//!
//! let (handle, tasks) = spawn(Game::with_seed(7), RuntimeConfig::default());
//! handle.command(Command::HardDrop).await?;
//! println!("{}", handle.state().borrow().snapshot.lines_cleared);
//! handle.shutdown().await?;
//! let game = tasks.join().await?;
//! # let _ = game;
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod config;
pub mod error;
pub mod persist;
pub mod ticker;

pub use tetrion_core as core;
pub use tetrion_types as types;

pub use actor::{spawn, GameHandle, Request, RuntimeState, RuntimeTasks, SaveStatus};
pub use config::RuntimeConfig;
pub use error::{PersistError, RuntimeError};
pub use persist::{load_game, save_game};
