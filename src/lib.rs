//! Bounce Arena - circles and rectangles falling, bouncing and being dragged
//!
//! Core modules:
//! - `sim`: Physics core (integration, walls, pair collisions, drag, scheduling)
//! - `settings`: Serializable physics and scheduler configuration
//! - `scene`: Initial shape layouts
//! - `color`: Presentation colors passed through to the surface

pub mod color;
pub mod scene;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use scene::{Scene, ShapeSpec};
pub use settings::{CollisionMode, ScheduleMode, Settings};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Downward gravitational acceleration (units/s²)
    pub const GRAVITY: f32 = 30.0;
    /// Velocity multiplier applied on every bounce
    pub const BOUNCE: f32 = 0.9;

    /// Nominal tick cadence (10 ms)
    pub const TICK_INTERVAL: f32 = 0.010;
    /// Maximum fixed steps per scheduler advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock slice a single advance will account for
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 450.0;

    /// Shape defaults
    pub const CIRCLE_RADIUS: f32 = 30.0;
    pub const RECT_WIDTH: f32 = 80.0;
    pub const RECT_HEIGHT: f32 = 40.0;
}

/// Gravity as an acceleration vector
#[inline]
pub fn gravity_vector(g: f32) -> Vec2 {
    Vec2::new(0.0, g)
}

/// True if an arena extent on one axis can be clamped against
#[inline]
pub fn valid_extent(extent: f32) -> bool {
    extent.is_finite() && extent > 0.0
}

/// Clamp `value` into `[0, hi]`, pinning at zero when `hi` is negative
#[inline]
pub fn clamp_to_range(value: f32, hi: f32) -> f32 {
    value.min(hi).max(0.0)
}
