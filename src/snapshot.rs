//! Serialized processor state for save/resume.
//!
//! A snapshot covers the processor only. Memory belongs to the bus and is
//! the host's responsibility; restoring a snapshot over different memory is
//! well-defined but will not replay the same execution.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CpuError, Result};

/// Everything [`crate::Cpu::snapshot`] captures, including the in-flight
/// instruction context, so a resume mid-countdown stays cycle-exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub fetched: u8,
    pub addr_abs: u16,
    pub addr_rel: u16,
    pub opcode: u8,
    pub cycles: u8,
    pub ticks: u64,
}

impl Snapshot {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot, rejecting payloads written by an incompatible
    /// version of this crate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        if snapshot.version != Self::CURRENT_VERSION {
            return Err(CpuError::SnapshotVersion {
                current: Self::CURRENT_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(&fs::read(path)?)
    }
}
