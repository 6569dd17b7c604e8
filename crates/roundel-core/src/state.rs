use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN_DEGREES, MAX_SCALE, MIN_SCALE};

/// 2D offset in preview-space pixels, relative to the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// How the user's photo is currently framed inside the circle.
///
/// `scale` is always within [`MIN_SCALE`, `MAX_SCALE`] and `rotation_degrees`
/// within (-360, 360) after any mutation. `translation` is unclamped so the
/// photo may be dragged arbitrarily far out of the circle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    scale: f32,
    rotation_degrees: f32,
    translation: Offset,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_degrees: 0.0,
            translation: Offset::ZERO,
        }
    }
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    pub fn translation(&self) -> Offset {
        self.translation
    }

    pub fn set_scale(&mut self, value: f32) {
        if value.is_finite() {
            self.scale = value.clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    pub fn adjust_scale(&mut self, delta: f32) {
        self.set_scale(self.scale + delta);
    }

    /// Store `degrees % 360`. The result keeps the sign of the input.
    pub fn set_rotation(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.rotation_degrees = degrees % FULL_TURN_DEGREES;
        }
    }

    pub fn adjust_rotation(&mut self, delta_degrees: f32) {
        self.set_rotation(self.rotation_degrees + delta_degrees);
    }

    pub fn translate_by(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.translation.x += dx;
            self.translation.y += dy;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zoom slider position (percent) matching the current scale.
    pub fn zoom_slider_position(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Rotate slider position matching the current rotation.
    pub fn rotate_slider_position(&self) -> f32 {
        self.rotation_degrees
    }
}
