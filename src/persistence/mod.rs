//! Save/load of brick progress and lives
//!
//! Features:
//! - Fixed-layout blob: one `i32` per brick (row-major), then lives
//! - Cursor-based decoding with explicit length checks
//! - Storage backends behind [`SaveStorage`] (file on disk, or in memory)
//!
//! There is no versioning: changing the grid dimensions makes old saves
//! decode as [`CorruptSave`].

pub mod blob;
pub mod storage;

pub use blob::{BLOB_LEN, BlobReader, CorruptSave, SaveBlob};
pub use storage::{FileStorage, MemoryStorage, SAVE_FILE_NAME, SaveStorage};

use thiserror::Error;

use crate::sim::GameState;

/// Errors from saving or loading a game
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt save: {0}")]
    Corrupt(#[from] CorruptSave),
}

/// Capture `state` and write it to `storage`
pub fn save_game(state: &GameState, storage: &mut dyn SaveStorage) -> Result<(), SaveError> {
    let blob = SaveBlob::capture(state);
    storage.write(&blob.encode())?;
    log::info!(
        "Game saved ({} bricks left, {} lives)",
        blob.active_bricks(),
        blob.lives
    );
    Ok(())
}

/// Read a save from `storage`
///
/// `Ok(None)` means there is no save yet.
pub fn load_game(storage: &dyn SaveStorage) -> Result<Option<SaveBlob>, SaveError> {
    let Some(bytes) = storage.read()? else {
        log::info!("No save found");
        return Ok(None);
    };
    let blob = SaveBlob::decode(&bytes)?;
    log::info!(
        "Loaded save ({} bricks left, {} lives)",
        blob.active_bricks(),
        blob.lives
    );
    Ok(Some(blob))
}
