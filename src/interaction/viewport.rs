use serde::{Deserialize, Serialize};

use crate::constants::VIEWPORT_MARGIN;

/// Tolerance when a zoom-out lands back on the minimum scale
const SCALE_EPSILON: f64 = 1e-9;

/// Pan and zoom layered on top of projected station positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub margin: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_MARGIN)
    }
}

impl Viewport {
    #[must_use]
    pub fn new(margin: f64) -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            margin,
        }
    }

    /// Undo pan and zoom, giving the position in projected coordinates
    #[must_use]
    pub fn screen_to_world(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.translate_x) / self.scale, (y - self.translate_y) / self.scale)
    }

    #[must_use]
    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale + self.translate_x, y * self.scale + self.translate_y)
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx;
        self.translate_y += dy;
    }

    /// Multiply the scale by `factor`, keeping the point under `(x, y)` fixed.
    ///
    /// A request that would take the scale below `min_scale` is ignored
    /// entirely and `false` returned. Results above `max_scale` are clamped.
    pub fn zoom_at(&mut self, factor: f64, x: f64, y: f64, min_scale: f64, max_scale: f64) -> bool {
        let old_scale = self.scale;
        let requested = old_scale * factor;

        if !requested.is_finite() || requested < min_scale - SCALE_EPSILON {
            return false;
        }

        let new_scale = requested.clamp(min_scale, max_scale.max(min_scale));
        if new_scale == old_scale {
            return false;
        }

        self.translate_x = x - (x - self.translate_x) * (new_scale / old_scale);
        self.translate_y = y - (y - self.translate_y) * (new_scale / old_scale);
        self.scale = new_scale;
        true
    }
}
