//! Explicit Euler integration under constant acceleration

use glam::Vec2;

use super::shape::ShapeEntity;

/// Advance velocity then position by `dt` seconds.
///
/// Zero, negative or non-finite `dt` leaves the shape untouched.
pub fn integrate(shape: &mut ShapeEntity, acceleration: Vec2, dt: f32) {
    if !(dt.is_finite() && dt > 0.0) {
        return;
    }
    shape.vel += acceleration * dt;
    shape.pos += shape.vel * dt;
}
