use glam::Vec2;

/// Axis-aligned rectangle, `min` inclusive top-left, `max` bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// 2D camera: `target` (world) is drawn at `offset` (screen), scaled by
/// `zoom` screen pixels per world unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera2D {
    pub offset: Vec2,
    pub target: Vec2,
    pub zoom: f32,
}

impl Camera2D {
    /// Camera with the world origin pinned to the screen's top-left corner.
    pub fn with_zoom(zoom: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            target: Vec2::ZERO,
            zoom,
        }
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom + self.target
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.target) * self.zoom + self.offset
    }

    /// World-space rectangle covered by a screen of `screen` pixels.
    pub fn visible_world(&self, screen: Vec2) -> Rect {
        Rect {
            min: self.screen_to_world(Vec2::ZERO),
            max: self.screen_to_world(screen),
        }
    }
}

/// Everything the simulation needs to know about the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub camera: Camera2D,
    /// Screen size in pixels.
    pub screen: Vec2,
}

impl Viewport {
    pub fn new(camera: Camera2D, screen: Vec2) -> Self {
        Self { camera, screen }
    }

    pub fn world_bounds(&self) -> Rect {
        self.camera.visible_world(self.screen)
    }
}
