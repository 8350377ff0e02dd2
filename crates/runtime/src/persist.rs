//! Snapshot files on disk.
//!
//! Thin async wrappers around the text format in [`crate::core::persist`].

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::core::{Game, ShapeRng};
use crate::error::PersistError;

/// Write the game's snapshot text to `path`, replacing any existing file.
pub async fn save_game(game: &Game, path: &Path) -> Result<(), PersistError> {
    let text = game.serialize();
    match fs::write(path, text).await {
        Ok(()) => {
            info!(path = %path.display(), lines_cleared = game.lines_cleared(), "game saved");
            Ok(())
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "save failed");
            Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Read a snapshot file and restore a game from it.
pub async fn load_game(path: &Path, rng: ShapeRng) -> Result<Game, PersistError> {
    let text = fs::read_to_string(path).await.map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let game = Game::deserialize(&text, rng).map_err(|source| PersistError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        lines_cleared = game.lines_cleared(),
        game_over = game.is_game_over(),
        "game loaded"
    );
    Ok(game)
}
