//! Snowflake ID - 64-bit time-sortable unique identifier
//!
//! Layout: 42 bits of milliseconds since the custom epoch, 10 bits of worker
//! ID, 12 bits of per-millisecond sequence. IDs from different tables live in
//! different id spaces but share this representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// 64-bit time-sortable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2023-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_672_531_200_000;

    /// Create a Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the Snowflake is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since the Unix epoch encoded in this ID
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    /// Parse from a decimal string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialized as a string: 64-bit integers lose precision in JavaScript.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| serde::de::Error::custom("invalid snowflake string"))
    }
}

/// Thread-safe Snowflake generator.
///
/// A single mutex guards the (timestamp, sequence) pair; contention is
/// bounded by the request rate, which is far below the 4096-per-millisecond
/// capacity of the sequence field.
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    last_timestamp: i64,
    sequence: i64,
}

impl SnowflakeGenerator {
    /// Create a new generator with the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < 1024, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: Mutex::new(GeneratorState {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    /// Generate a new unique Snowflake ID
    pub fn generate(&self) -> Snowflake {
        let mut state = self.state.lock().expect("generator lock poisoned");

        let mut timestamp = Self::now_millis();
        if timestamp < state.last_timestamp {
            // Clock went backwards; stick with the last timestamp and let the
            // sequence field absorb the skew.
            timestamp = state.last_timestamp;
        }

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & 0xFFF;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond
                while timestamp <= state.last_timestamp {
                    timestamp = Self::now_millis();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        let id = ((timestamp - Snowflake::EPOCH) << 22)
            | (i64::from(self.worker_id) << 12)
            | state.sequence;
        Snowflake::new(id)
    }

    /// Get the worker ID of this generator
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    #[inline]
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
