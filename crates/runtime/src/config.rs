//! Runtime configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `TETRION_GRAVITY_MS` | gravity period, `0` disables gravity | `500` |
//! | `TETRION_SAVE_PATH` | where SAVE writes the snapshot | `output.txt` |
//! | `TETRION_QUEUE_CAPACITY` | request queue bound | `64` |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::types::GRAVITY_MS;

pub const DEFAULT_SAVE_PATH: &str = "output.txt";
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Period of the gravity ticker, `None` for no gravity.
    pub gravity: Option<Duration>,
    pub save_path: PathBuf,
    pub queue_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            gravity: Some(Duration::from_millis(GRAVITY_MS)),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by `TETRION_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, "TETRION_GRAVITY_MS") {
            config.gravity = gravity_from_millis(ms);
        }
        if let Some(path) = lookup("TETRION_SAVE_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.save_path = PathBuf::from(path);
        }
        if let Some(capacity) = parse_var::<usize>(&lookup, "TETRION_QUEUE_CAPACITY") {
            config.queue_capacity = capacity;
        }
        config
    }

    pub fn with_gravity(mut self, gravity: Option<Duration>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Gravity period in milliseconds, `0` disables gravity.
    pub fn with_gravity_ms(self, ms: u64) -> Self {
        self.with_gravity(gravity_from_millis(ms))
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }
}

fn gravity_from_millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment value");
            None
        }
    }
}
