//! Error type shared by the spawner, the reload shim and config validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Every slot in the target pool is active. Recoverable: the frame goes on
    /// with the targets it already has.
    #[error("target pool is full ({capacity} slots active)")]
    PoolFull { capacity: usize },

    #[error("state blob is {actual} bytes, expected {expected}")]
    BlobSize { expected: usize, actual: usize },

    #[error("state blob is not aligned to {align} bytes")]
    BlobAlignment { align: usize },

    /// The blob has the right shape but a field holds a value no
    /// `GameState` could have written.
    #[error("state blob holds invalid {field} byte {value:#04x}")]
    CorruptState { field: &'static str, value: u8 },

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
