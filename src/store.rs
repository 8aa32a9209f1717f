//! Persistent high-score collaborator
//!
//! The engine writes through `ScoreStore` exactly once per terminated run.
//! Every implementation is best-effort: storage failures are logged and
//! swallowed, they never reach the simulation.

use log::warn;

/// A durable home for the single high-score scalar.
///
/// `write_high_score_if_greater` owns the monotonicity guarantee (the
/// persisted value never decreases); callers just hand over the final score.
pub trait ScoreStore {
    /// Current persisted best, 0 when nothing is stored yet
    fn read_high_score(&self) -> u32;

    /// Persist `candidate` if it beats the stored value. Best-effort.
    fn write_high_score_if_greater(&mut self, candidate: u32);
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn read_high_score(&self) -> u32 {
        (**self).read_high_score()
    }

    fn write_high_score_if_greater(&mut self, candidate: u32) {
        (**self).write_high_score_if_greater(candidate)
    }
}

/// In-memory store. The test fake, also handy for hosts that persist some
/// other way and only want the session-scoped behavior.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: u32,
    /// Every candidate handed to `write_high_score_if_greater`, in order.
    /// Tests assert against this.
    pub writes: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best, writes: Vec::new() }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read_high_score(&self) -> u32 {
        self.best
    }

    fn write_high_score_if_greater(&mut self, candidate: u32) {
        self.writes.push(candidate);
        if candidate > self.best {
            self.best = candidate;
        }
    }
}

/// JSON-file-backed store for native hosts.
///
/// The file holds a bare JSON number. A missing file reads as 0; a corrupt or
/// unwritable file is logged and otherwise ignored, leaving the previous
/// value in place.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileScoreStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScoreStore for FileScoreStore {
    fn read_high_score(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str::<u32>(text.trim()) {
                Ok(best) => best,
                Err(err) => {
                    warn!("high-score file {} is corrupt: {err}", self.path.display());
                    0
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => 0,
            Err(err) => {
                warn!("cannot read high-score file {}: {err}", self.path.display());
                0
            }
        }
    }

    fn write_high_score_if_greater(&mut self, candidate: u32) {
        if candidate <= self.read_high_score() {
            return;
        }
        if let Err(err) = std::fs::write(&self.path, candidate.to_string()) {
            warn!("cannot write high-score file {}: {err}", self.path.display());
        }
    }
}

/// LocalStorage-backed store for wasm hosts, under the same key the portal's
/// original board used.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageScoreStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageScoreStore {
    const STORAGE_KEY: &'static str = "snake_highscore";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageScoreStore {
    fn read_high_score(&self) -> u32 {
        Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    fn write_high_score_if_greater(&mut self, candidate: u32) {
        if candidate <= self.read_high_score() {
            return;
        }
        if let Some(storage) = Self::storage() {
            if storage.set_item(Self::STORAGE_KEY, &candidate.to_string()).is_err() {
                warn!("cannot write high score to LocalStorage");
            }
        }
    }
}

/// Alias for whichever durable store fits the current target
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformScoreStore = FileScoreStore;
#[cfg(target_arch = "wasm32")]
pub type PlatformScoreStore = LocalStorageScoreStore;
