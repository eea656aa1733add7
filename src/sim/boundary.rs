//! Arena wall collisions
//!
//! The arena is the box `[0, extent.x] × [0, extent.y]`. Each axis is
//! handled on its own; a corner hit bounces on both.

use glam::Vec2;

use super::shape::ShapeEntity;
use crate::{clamp_to_range, valid_extent};

/// Which walls were hit during a resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Clamp one axis and report whether it was outside `[0, hi]`
#[inline]
fn clamp_axis(pos: &mut f32, vel: &mut f32, hi: f32, bounce: f32) -> bool {
    let hi = hi.max(0.0);
    if *pos > hi {
        *pos = hi;
    } else if *pos < 0.0 {
        *pos = 0.0;
    } else {
        return false;
    }
    *vel = -*vel * bounce;
    true
}

/// Keep the shape inside the arena, reflecting and damping velocity on
/// every axis where it touched a wall.
///
/// Axes with a zero, negative or non-finite arena extent are skipped.
pub fn resolve_boundary(shape: &mut ShapeEntity, arena: Vec2, bounce: f32) -> WallHits {
    let limit = arena - shape.extent();
    let mut hits = WallHits::default();

    if valid_extent(arena.x) {
        hits.x = clamp_axis(&mut shape.pos.x, &mut shape.vel.x, limit.x, bounce);
    } else {
        log::trace!("shape {}: arena width {} not clampable", shape.id, arena.x);
    }
    if valid_extent(arena.y) {
        hits.y = clamp_axis(&mut shape.pos.y, &mut shape.vel.y, limit.y, bounce);
    } else {
        log::trace!("shape {}: arena height {} not clampable", shape.id, arena.y);
    }

    hits
}

/// Clamp position into the arena without touching velocity
pub fn clamp_into_arena(pos: Vec2, extent: Vec2, arena: Vec2) -> Vec2 {
    let limit = arena - extent;
    Vec2::new(
        if valid_extent(arena.x) {
            clamp_to_range(pos.x, limit.x)
        } else {
            pos.x
        },
        if valid_extent(arena.y) {
            clamp_to_range(pos.y, limit.y)
        } else {
            pos.y
        },
    )
}
