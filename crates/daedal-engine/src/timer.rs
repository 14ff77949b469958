//! Run timer and persisted best time.
//!
//! [`RunTimer`] accumulates the simulated frame deltas while the run is
//! live. Elapsed time is therefore a function of the dt stream, not of any
//! wall clock, which keeps sessions deterministic and pause trivially
//! correct (a paused frame simply never calls [`RunTimer::advance`]).
//!
//! The best completion time is the only state that survives a session. It
//! is read and written through the [`BestTimeStore`] trait: the JSON file
//! implementation persists a small document keyed by [`BEST_TIME_KEY`]
//! (mirroring the reference's durable key-value slot), and the in-memory
//! implementation backs tests and hosts without storage. Storage failures
//! are typed [`StorageError`]s; callers log and degrade, they never abort
//! the run.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Fixed key under which the best time scalar is stored.
pub const BEST_TIME_KEY: &str = "bestTime";

// ---------------------------------------------------------------------------
// RunTimer
// ---------------------------------------------------------------------------

/// Monotonic run clock fed by per-frame deltas.
#[derive(Debug, Clone, Default)]
pub struct RunTimer {
    elapsed: f64,
    running: bool,
}

impl RunTimer {
    /// A stopped timer at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the clock. Does not change the running flag.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Begin (or resume) accumulating.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop accumulating; the elapsed value freezes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Add one frame's delta if the timer is running.
    pub fn advance(&mut self, dt: f64) {
        if self.running {
            self.elapsed += dt;
        }
    }

    /// Seconds accumulated since the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether the timer is currently accumulating.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Render seconds as the HUD's `m:ss.ss` form.
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let rest = seconds % 60.0;
    format!("{minutes}:{rest:05.2}")
}

// ---------------------------------------------------------------------------
// Best-time storage
// ---------------------------------------------------------------------------

/// Failures while reading or writing the best-time record.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file IO failed.
    #[error("best-time storage IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The stored document is not valid JSON.
    #[error("best-time storage is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Durable slot for the single best-time scalar.
pub trait BestTimeStore {
    /// Load the stored best time, `None` when nothing has been recorded.
    fn load(&self) -> Result<Option<f64>, StorageError>;

    /// Persist a new best time.
    fn save(&mut self, seconds: f64) -> Result<(), StorageError>;
}

/// JSON-file backed store. The file holds a small object document; the
/// best time lives under [`BEST_TIME_KEY`] and unrelated keys are kept
/// intact across saves.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> Result<BTreeMap<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl BestTimeStore for JsonFileStore {
    fn load(&self) -> Result<Option<f64>, StorageError> {
        let doc = self.read_document()?;
        Ok(doc.get(BEST_TIME_KEY).and_then(Value::as_f64))
    }

    fn save(&mut self, seconds: f64) -> Result<(), StorageError> {
        let mut doc = self.read_document().unwrap_or_default();
        doc.insert(BEST_TIME_KEY.to_owned(), Value::from(seconds));
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<f64>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestTimeStore for MemoryStore {
    fn load(&self) -> Result<Option<f64>, StorageError> {
        Ok(self.value)
    }

    fn save(&mut self, seconds: f64) -> Result<(), StorageError> {
        self.value = Some(seconds);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_only_accumulates_while_running() {
        let mut timer = RunTimer::new();
        timer.advance(1.0);
        assert_eq!(timer.elapsed(), 0.0);

        timer.start();
        timer.advance(0.5);
        timer.advance(0.25);
        assert!((timer.elapsed() - 0.75).abs() < 1e-12);

        timer.stop();
        timer.advance(10.0);
        assert!((timer.elapsed() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn reset_zeroes_without_stopping() {
        let mut timer = RunTimer::new();
        timer.start();
        timer.advance(3.0);
        timer.reset();
        assert_eq!(timer.elapsed(), 0.0);
        assert!(timer.is_running());
    }

    #[test]
    fn formats_like_the_hud() {
        assert_eq!(format_time(0.0), "0:00.00");
        assert_eq!(format_time(7.25), "0:07.25");
        assert_eq!(format_time(65.5), "1:05.50");
        assert_eq!(format_time(600.0), "10:00.00");
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().expect("load"), None);
        store.save(12.5).expect("save");
        assert_eq!(store.load().expect("load"), Some(12.5));
    }

    #[test]
    fn json_file_store_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "daedal-best-time-{}-round-trip.json",
            std::process::id()
        ));
        let _cleanup = fs::remove_file(&path);

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load().expect("load missing file"), None);

        store.save(42.75).expect("save");
        assert_eq!(store.load().expect("load"), Some(42.75));

        // A second save overwrites the slot.
        store.save(40.0).expect("save again");
        assert_eq!(store.load().expect("reload"), Some(40.0));

        fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn json_file_store_preserves_unrelated_keys() {
        let path = std::env::temp_dir().join(format!(
            "daedal-best-time-{}-preserve.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"otherSetting": true}"#).expect("seed file");

        let mut store = JsonFileStore::new(&path);
        store.save(9.0).expect("save");

        let text = fs::read_to_string(&path).expect("read back");
        let doc: BTreeMap<String, Value> = serde_json::from_str(&text).expect("parse");
        assert_eq!(doc.get("otherSetting"), Some(&Value::Bool(true)));
        assert_eq!(doc.get(BEST_TIME_KEY), Some(&Value::from(9.0)));

        fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn malformed_document_surfaces_as_format_error() {
        let path = std::env::temp_dir().join(format!(
            "daedal-best-time-{}-malformed.json",
            std::process::id()
        ));
        fs::write(&path, "not json").expect("seed file");

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StorageError::Format(_))));

        fs::remove_file(&path).expect("cleanup");
    }
}
