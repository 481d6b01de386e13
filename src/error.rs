//! Error type shared across the crate.

use thiserror::Error;

/// Everything that can go wrong outside of emulated execution. Emulated
/// programs cannot fail; only host-side misuse and snapshot I/O can.
#[derive(Error, Debug)]
pub enum CpuError {
    #[error("no bus connected: call connect() before stepping the cpu")]
    NotConnected,

    #[error("snapshot version {found} not supported (current version is {current})")]
    SnapshotVersion { current: u32, found: u32 },

    #[error("snapshot codec error: {0}")]
    SnapshotCodec(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used by the public API.
pub type Result<T> = std::result::Result<T, CpuError>;
