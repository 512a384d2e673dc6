//! Selection snapshot for save/restore
//!
//! Captures what a host needs to rebuild a wheel after being torn down: the
//! selected index and the selectable bounds. Items and viewport are supplied
//! again by the host.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WheelError};

/// Size of the binary encoding
pub const SNAPSHOT_LEN: usize = 12;

/// Saved selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WheelSnapshot {
    /// Selected index
    pub index: i32,
    /// Lowest selectable index
    pub min: i32,
    /// Highest selectable index
    pub max: i32,
}

impl WheelSnapshot {
    /// Encode as `index`, `min`, `max`, little-endian
    pub fn to_bytes(&self) -> [u8; SNAPSHOT_LEN] {
        let mut bytes = [0u8; SNAPSHOT_LEN];
        bytes[0..4].copy_from_slice(&self.index.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.min.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.max.to_le_bytes());
        bytes
    }

    /// Decode the layout written by [`to_bytes`](Self::to_bytes)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; SNAPSHOT_LEN] =
            bytes.try_into().map_err(|_| WheelError::SnapshotLength {
                expected: SNAPSHOT_LEN,
                actual: bytes.len(),
            })?;
        let word = |at: usize| {
            i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        Ok(Self {
            index: word(0),
            min: word(4),
            max: word(8),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| WheelError::SnapshotFormat(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| WheelError::SnapshotFormat(e.to_string()))
    }
}
