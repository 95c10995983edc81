use std::mem::size_of;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use square_chase::camera::{Camera2D, Viewport};
use square_chase::compute::tick;
use square_chase::config::GameConfig;
use square_chase::entities::*;
use square_chase::input::FrameInput;
use square_chase::reload::{adopt, init_in_place, serialize_size, snapshot, StateBlob};
use square_chase::GameError;

/// Byte offsets inside the `#[repr(C)]` layout.
const FIRST_ENEMY_FLAG: usize = 24 + 20;
const SCENE_BYTE: usize = 24 + 24 * POOL_CAPACITY;
const RUNNING_BYTE: usize = SCENE_BYTE + 1;

fn view() -> Viewport {
    Viewport::new(Camera2D::with_zoom(1.0), Vec2::new(400.0, 400.0))
}

fn started_blob() -> StateBlob {
    let mut blob = StateBlob::new();
    let state = init_in_place(blob.bytes_mut()).unwrap();
    let confirm = FrameInput { confirm: true, ..FrameInput::default() };
    *state = tick(state, &confirm, 0.016, &view(), &GameConfig::default(), &mut StdRng::seed_from_u64(3));
    blob
}

#[test]
fn serialize_size_matches_layout() {
    assert_eq!(serialize_size(), size_of::<GameState>());
    assert_eq!(serialize_size(), 24 + 24 * POOL_CAPACITY + 4);
    assert_eq!(StateBlob::new().bytes().len(), serialize_size());
}

#[test]
fn init_in_place_writes_fresh_state() {
    let mut blob = StateBlob::new();
    let state = init_in_place(blob.bytes_mut()).unwrap();
    assert_eq!(*state, GameState::new());
}

#[test]
fn adopt_rebinds_without_copying() {
    let mut blob = started_blob();
    let base = blob.bytes().as_ptr();

    let state = adopt(blob.bytes_mut()).unwrap();
    assert!(std::ptr::eq(&*state as *const GameState as *const u8, base));
    assert_eq!(state.scene(), Scene::Playing);
    state.player.score = 41;

    let again = adopt(blob.bytes_mut()).unwrap();
    assert_eq!(again.player.score, 41);
}

#[test]
fn snapshot_survives_a_swap_into_new_memory() {
    let mut blob = started_blob();
    let mut moved = StateBlob::new();
    moved.bytes_mut().copy_from_slice(blob.bytes());

    let original = *adopt(blob.bytes_mut()).unwrap();
    let state = adopt(moved.bytes_mut()).unwrap();
    assert_eq!(*state, original);
    assert_eq!(snapshot(state), blob.bytes());
}

#[test]
fn adopt_rejects_wrong_size() {
    let mut short = vec![0u8; serialize_size() - 4];
    assert_eq!(
        adopt(&mut short).unwrap_err(),
        GameError::BlobSize { expected: serialize_size(), actual: serialize_size() - 4 }
    );
}

#[test]
fn adopt_rejects_misaligned_blob() {
    let mut words = vec![0u32; serialize_size() / 4 + 1];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    let err = adopt(&mut bytes[1..1 + serialize_size()]).unwrap_err();
    assert!(matches!(err, GameError::BlobAlignment { .. }), "{err:?}");
}

#[test]
fn adopt_rejects_unknown_scene() {
    let mut blob = started_blob();
    blob.bytes_mut()[SCENE_BYTE] = 7;
    assert_eq!(
        adopt(blob.bytes_mut()).unwrap_err(),
        GameError::CorruptState { field: "scene", value: 7 }
    );
}

#[test]
fn adopt_rejects_bad_flags() {
    let mut blob = started_blob();
    blob.bytes_mut()[RUNNING_BYTE] = 2;
    assert_eq!(
        adopt(blob.bytes_mut()).unwrap_err(),
        GameError::CorruptState { field: "running", value: 2 }
    );

    let mut blob = started_blob();
    blob.bytes_mut()[FIRST_ENEMY_FLAG] = 0xff;
    assert_eq!(
        adopt(blob.bytes_mut()).unwrap_err(),
        GameError::CorruptState { field: "target.enemy", value: 0xff }
    );
}

#[test]
fn zeroed_blob_adopts_as_stopped_start_screen() {
    let mut blob = StateBlob::new();
    let state = adopt(blob.bytes_mut()).unwrap();
    assert_eq!(state.scene(), Scene::StartScreen);
    assert!(!state.is_running());
}
