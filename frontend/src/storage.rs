use gloo_console::warn;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use workout_tracker_lib::workout::Workout;

const STORAGE_KEY: &str = "workouts";

/// Whole-value overwrite of the persisted log. A failed write is logged;
/// the in-memory log stays intact.
pub fn save(workouts: &[Workout]) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, workouts) {
        warn!(format!("Failed to persist workouts: {err}"));
    }
}

/// Loads the persisted log. Nothing stored, or a value that no longer
/// decodes, yields an empty log. Decoded records are trusted as-is.
pub fn restore() -> Vec<Workout> {
    match LocalStorage::get(STORAGE_KEY) {
        Ok(workouts) => workouts,
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(err) => {
            warn!(format!("Ignoring stored workouts: {err}"));
            Vec::new()
        }
    }
}
