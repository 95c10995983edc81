//! Host lifecycle shim for live code reloading.
//!
//! The host owns a block of memory big enough for one `GameState`
//! (`serialize_size`).  On first load it calls `init_in_place`; after every
//! code swap it calls `adopt` on the same block, which reinterprets the bytes
//! as the working state without copying or reinitialising anything.

use std::mem::{align_of, size_of};

use bytemuck::PodCastError;
use tracing::error;

use crate::entities::{GameState, Scene};
use crate::error::GameError;

const _: () = assert!(align_of::<GameState>() <= align_of::<u32>());

/// Bytes the host must reserve for the state.
pub const fn serialize_size() -> usize {
    size_of::<GameState>()
}

/// Rebind to a state that already lives in `blob`.
pub fn adopt(blob: &mut [u8]) -> Result<&mut GameState, GameError> {
    let expected = serialize_size();
    let actual = blob.len();
    if actual != expected {
        error!(expected, actual, "rejected state blob");
        return Err(GameError::BlobSize { expected, actual });
    }
    let state: &mut GameState = bytemuck::try_from_bytes_mut(blob).map_err(|err| {
        error!(?err, "rejected state blob");
        match err {
            PodCastError::TargetAlignmentGreaterAndInputNotAligned
            | PodCastError::AlignmentMismatch => GameError::BlobAlignment {
                align: align_of::<GameState>(),
            },
            _ => GameError::BlobSize { expected, actual },
        }
    })?;
    validate(state).map_err(|err| {
        error!(%err, "rejected state blob");
        err
    })?;
    Ok(state)
}

/// Write a fresh `GameState` into `blob` and bind to it.
pub fn init_in_place(blob: &mut [u8]) -> Result<&mut GameState, GameError> {
    let expected = serialize_size();
    if blob.len() != expected {
        return Err(GameError::BlobSize {
            expected,
            actual: blob.len(),
        });
    }
    let state: &mut GameState =
        bytemuck::try_from_bytes_mut(blob).map_err(|_| GameError::BlobAlignment {
            align: align_of::<GameState>(),
        })?;
    *state = GameState::new();
    Ok(state)
}

/// The state's bytes, exactly as `adopt` expects to find them.
pub fn snapshot(state: &GameState) -> &[u8] {
    bytemuck::bytes_of(state)
}

fn validate(state: &GameState) -> Result<(), GameError> {
    if Scene::from_u8(state.scene_byte()).is_none() {
        return Err(GameError::CorruptState {
            field: "scene",
            value: state.scene_byte(),
        });
    }
    check_flag("running", state.running_byte())?;
    check_flag("player.active", state.player.entity.active_byte())?;
    for target in &state.targets {
        check_flag("target.active", target.entity.active_byte())?;
        check_flag("target.enemy", target.enemy_byte())?;
    }
    Ok(())
}

fn check_flag(field: &'static str, value: u8) -> Result<(), GameError> {
    match value {
        0 | 1 => Ok(()),
        _ => Err(GameError::CorruptState { field, value }),
    }
}

/// Host-side block with the size and alignment `adopt` needs.
#[derive(Clone, Debug)]
pub struct StateBlob {
    words: Vec<u32>,
}

impl StateBlob {
    /// Zero-filled block.  Zeroes decode as a stopped start screen, so
    /// `init_in_place` is the expected first call.
    pub fn new() -> Self {
        let words = serialize_size().div_ceil(size_of::<u32>());
        Self {
            words: vec![0; words],
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u32, u8>(&self.words)[..serialize_size()]
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u32, u8>(&mut self.words)[..serialize_size()]
    }
}

impl Default for StateBlob {
    fn default() -> Self {
        Self::new()
    }
}
