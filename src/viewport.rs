#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::FRUSTUM_HALF_HEIGHT;

/// A point in either screen or world space.
///
/// Screen coordinates are CSS pixels with y growing down; world coordinates
/// are unitless with y growing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Orthographic viewport mapping the canvas onto a fixed-height world window.
///
/// The frustum is `[-h·aspect, h·aspect] × [-h, h]` where `h` is
/// [`FRUSTUM_HALF_HEIGHT`] and `aspect` is the screen port's width/height
/// ratio. It is rebuilt on every resize so a world unit is the same number of
/// pixels in both directions.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    screen_width: f64,
    screen_height: f64,
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Viewport {
    /// Create a viewport for a screen port of the given size in CSS pixels.
    #[must_use]
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        let mut vp = Self {
            screen_width: 1.0,
            screen_height: 1.0,
            left: -FRUSTUM_HALF_HEIGHT,
            right: FRUSTUM_HALF_HEIGHT,
            bottom: -FRUSTUM_HALF_HEIGHT,
            top: FRUSTUM_HALF_HEIGHT,
        };
        vp.set_screen_port(screen_width, screen_height);
        vp
    }

    /// Update the screen port and rebuild the frustum for the new aspect
    /// ratio. Non-positive dimensions are clamped to one pixel.
    pub fn set_screen_port(&mut self, width: f64, height: f64) {
        self.screen_width = width.max(1.0);
        self.screen_height = height.max(1.0);
        let aspect = self.screen_width / self.screen_height;
        self.left = -FRUSTUM_HALF_HEIGHT * aspect;
        self.right = FRUSTUM_HALF_HEIGHT * aspect;
        self.bottom = -FRUSTUM_HALF_HEIGHT;
        self.top = FRUSTUM_HALF_HEIGHT;
    }

    /// The screen port as `(width, height)` in CSS pixels.
    #[must_use]
    pub fn screen_port(&self) -> (f64, f64) {
        (self.screen_width, self.screen_height)
    }

    /// Convert a screen-space point (CSS pixels, y down) to world
    /// coordinates (y up).
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: self.left + (screen.x / self.screen_width) * (self.right - self.left),
            y: self.top - (screen.y / self.screen_height) * (self.top - self.bottom),
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: (world.x - self.left) / (self.right - self.left) * self.screen_width,
            y: (self.top - world.y) / (self.top - self.bottom) * self.screen_height,
        }
    }
}
