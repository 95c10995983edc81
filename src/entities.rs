/// All game entity types — pure data, no game rules.
///
/// Every type here is `#[repr(C)]` plain-old-data so a whole `GameState` can
/// live inside a byte blob owned by the host (see `reload`).  Flags are
/// single bytes followed by zeroed `reserved` padding; accessors expose them
/// as `bool`.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Number of target slots.  Fixed for the lifetime of the state.
pub const POOL_CAPACITY: usize = 16;

// ── Scene ─────────────────────────────────────────────────────────────────────

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    StartScreen = 0,
    Playing = 1,
    GameOver = 2,
}

impl Scene {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Scene::StartScreen),
            1 => Some(Scene::Playing),
            2 => Some(Scene::GameOver),
            _ => None,
        }
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// Positioned, sized, activatable square.  `position` is the top-left corner.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Entity {
    pub position: Vec2,
    pub size: Vec2,
    active: u8,
    reserved: [u8; 3],
}

impl Entity {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            active: 1,
            reserved: [0; 3],
        }
    }

    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active as u8;
    }

    /// Raw flag byte, checked by `reload::adopt`.
    pub(crate) fn active_byte(&self) -> u8 {
        self.active
    }
}

// ── Target ────────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Target {
    pub entity: Entity,
    enemy: u8,
    reserved: [u8; 3],
}

impl Target {
    pub fn new(entity: Entity, is_enemy: bool) -> Self {
        Self {
            entity,
            enemy: is_enemy as u8,
            reserved: [0; 3],
        }
    }

    pub fn is_enemy(&self) -> bool {
        self.enemy != 0
    }

    pub fn set_enemy(&mut self, is_enemy: bool) {
        self.enemy = is_enemy as u8;
    }

    pub fn is_active(&self) -> bool {
        self.entity.is_active()
    }

    pub(crate) fn enemy_byte(&self) -> u8 {
        self.enemy
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Player {
    pub entity: Entity,
    pub score: u32,
}

impl Player {
    pub fn new(position: Vec2, size: f32) -> Self {
        Self {
            entity: Entity::new(position, Vec2::splat(size)),
            score: 0,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  `Copy`, so the tick can build the next frame from
/// a snapshot of the current one.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GameState {
    pub player: Player,
    pub targets: [Target; POOL_CAPACITY],
    scene: u8,
    running: u8,
    reserved: [u8; 2],
}

impl GameState {
    /// Fresh process state: start screen, empty pool, running.
    pub fn new() -> Self {
        Self {
            player: Player::new(Vec2::ZERO, 0.0),
            targets: [Target::zeroed(); POOL_CAPACITY],
            scene: Scene::StartScreen as u8,
            running: 1,
            reserved: [0; 2],
        }
    }

    pub fn scene(&self) -> Scene {
        // Only `set_scene` and a validated `adopt` write this byte.
        Scene::from_u8(self.scene).unwrap_or_default()
    }

    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene as u8;
    }

    /// Checked by the frame driver once per frame boundary.
    pub fn is_running(&self) -> bool {
        self.running != 0
    }

    /// Ends the process lifecycle: the driver stops after this frame.
    pub fn shutdown(&mut self) {
        self.running = 0;
    }

    pub fn deactivate_targets(&mut self) {
        for target in &mut self.targets {
            target.entity.set_active(false);
        }
    }

    pub fn active_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| t.is_active())
    }

    pub fn active_target_count(&self) -> usize {
        self.active_targets().count()
    }

    pub(crate) fn scene_byte(&self) -> u8 {
        self.scene
    }

    pub(crate) fn running_byte(&self) -> u8 {
        self.running
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
