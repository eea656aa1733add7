//! Pairwise collision detection and response
//!
//! Circles collide with circles, rectangles with rectangles. Detection
//! produces a `CollisionResult` whose normal points from the other shape
//! toward the one being resolved; response pushes shapes apart and
//! reflects their velocity with damping.

use glam::Vec2;

use super::shape::{GeometryKind, ShapeEntity};

/// Normal used when two circle centers coincide
pub const FALLBACK_NORMAL: Vec2 = Vec2::X;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point (if hit)
    pub point: Vec2,
    /// Unit normal pointing from the other shape toward this one.
    /// For rectangles this is always one of ±X / ±Y.
    pub normal: Vec2,
    /// Penetration depth along the normal
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Circle vs circle, by centers and radii
pub fn circle_circle(
    center: Vec2,
    radius: f32,
    other_center: Vec2,
    other_radius: f32,
) -> CollisionResult {
    let delta = center - other_center;
    let distance = delta.length();
    let radius_sum = radius + other_radius;

    if distance >= radius_sum {
        return CollisionResult::miss();
    }

    let normal = if distance > 0.0 {
        delta / distance
    } else {
        FALLBACK_NORMAL
    };

    CollisionResult {
        hit: true,
        point: other_center + normal * other_radius,
        normal,
        penetration: radius_sum - distance,
    }
}

/// Axis-aligned box vs box, by top-left corners and sizes.
///
/// Only the axis of smaller overlap is reported; ties go to Y.
pub fn rect_rect(pos: Vec2, size: Vec2, other_pos: Vec2, other_size: Vec2) -> CollisionResult {
    let overlapping = pos.x < other_pos.x + other_size.x
        && pos.x + size.x > other_pos.x
        && pos.y < other_pos.y + other_size.y
        && pos.y + size.y > other_pos.y;

    if !overlapping {
        return CollisionResult::miss();
    }

    let overlap_x = (pos.x + size.x - other_pos.x).min(other_pos.x + other_size.x - pos.x);
    let overlap_y = (pos.y + size.y - other_pos.y).min(other_pos.y + other_size.y - pos.y);

    // Center of the intersection box
    let lo = pos.max(other_pos);
    let hi = (pos + size).min(other_pos + other_size);
    let point = (lo + hi) * 0.5;

    let center_delta = (pos + size * 0.5) - (other_pos + other_size * 0.5);
    let side = |d: f32| if d < 0.0 { -1.0 } else { 1.0 };

    let (normal, penetration) = if overlap_x < overlap_y {
        (Vec2::new(side(center_delta.x), 0.0), overlap_x)
    } else {
        (Vec2::new(0.0, side(center_delta.y)), overlap_y)
    };

    CollisionResult {
        hit: true,
        point,
        normal,
        penetration,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Negate and damp the component of `velocity` along a unit `axis`,
/// leaving the other component untouched
#[inline]
pub fn bounce_axis(velocity: Vec2, axis: Vec2, bounce: f32) -> Vec2 {
    velocity - axis * velocity.dot(axis) * (1.0 + bounce)
}

/// Resolve `this` against `other`, moving only `this`.
///
/// Circles are pushed out by half the penetration and their velocity is
/// reflected about the normal. Rectangles back out along the smaller-overlap
/// axis, against their own direction of travel on that axis (zero counts as
/// positive), and bounce on that axis only.
///
/// Returns true if a collision was resolved.
pub fn resolve_self(this: &mut ShapeEntity, other: &ShapeEntity, bounce: f32) -> bool {
    let contact = this.contact(other);
    if !contact.hit {
        return false;
    }

    match this.kind() {
        GeometryKind::Circle => {
            this.pos += contact.normal * (contact.penetration * 0.5);
            this.vel = reflect_velocity(this.vel, contact.normal) * bounce;
        }
        GeometryKind::Rectangle => {
            let axis = contact.normal.abs();
            let travel = if this.vel.dot(axis) < 0.0 { -1.0 } else { 1.0 };
            this.pos -= axis * (contact.penetration * travel);
            this.vel = bounce_axis(this.vel, axis, bounce);
        }
    }

    log::trace!(
        "shape {} resolved against {} (depth {:.3})",
        this.id,
        other.id,
        contact.penetration
    );
    true
}

/// Resolve a pair in one call: each shape moves half the penetration away
/// from the other along the contact normal and both bounce.
///
/// Returns true if a collision was resolved.
pub fn resolve_mutual(a: &mut ShapeEntity, b: &mut ShapeEntity, bounce: f32) -> bool {
    let contact = a.contact(b);
    if !contact.hit {
        return false;
    }

    let push = contact.normal * (contact.penetration * 0.5);
    a.pos += push;
    b.pos -= push;

    match a.kind() {
        GeometryKind::Circle => {
            a.vel = reflect_velocity(a.vel, contact.normal) * bounce;
            b.vel = reflect_velocity(b.vel, contact.normal) * bounce;
        }
        GeometryKind::Rectangle => {
            let axis = contact.normal.abs();
            a.vel = bounce_axis(a.vel, axis, bounce);
            b.vel = bounce_axis(b.vel, axis, bounce);
        }
    }

    log::trace!(
        "shapes {} and {} separated (depth {:.3})",
        a.id,
        b.id,
        contact.penetration
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Geometry;

    fn circle_at(id: u32, center: Vec2, radius: f32) -> ShapeEntity {
        let mut shape = ShapeEntity::new(id, Geometry::circle(radius));
        shape.pos = center - Vec2::splat(radius);
        shape
    }

    fn rect_at(id: u32, pos: Vec2, w: f32, h: f32) -> ShapeEntity {
        let mut shape = ShapeEntity::new(id, Geometry::rectangle(w, h));
        shape.pos = pos;
        shape
    }

    #[test]
    fn test_reflect_velocity() {
        // Moving right, hits a wall whose normal points left
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_bounce_axis_keeps_other_component() {
        let v = bounce_axis(Vec2::new(10.0, -20.0), Vec2::Y, 0.9);
        assert!((v.x - 10.0).abs() < 1e-6);
        assert!((v.y - 18.0).abs() < 1e-5);
    }

    #[test]
    fn test_circle_circle_miss_when_touching() {
        let result = circle_circle(Vec2::ZERO, 30.0, Vec2::new(60.0, 0.0), 30.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_circle_circle_normal_points_toward_self() {
        let result = circle_circle(Vec2::new(100.0, 100.0), 30.0, Vec2::new(110.0, 100.0), 30.0);
        assert!(result.hit);
        assert!((result.normal - Vec2::new(-1.0, 0.0)).length() < 1e-6);
        assert!((result.penetration - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_coincident_circles_use_fallback_normal() {
        let result = circle_circle(Vec2::splat(50.0), 10.0, Vec2::splat(50.0), 10.0);
        assert!(result.hit);
        assert_eq!(result.normal, FALLBACK_NORMAL);
        assert!(result.normal.is_finite());
        assert!((result.penetration - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_rect_rect_picks_smaller_axis() {
        // 10 deep on x, 30 deep on y
        let result = rect_rect(
            Vec2::new(100.0, 100.0),
            Vec2::new(80.0, 40.0),
            Vec2::new(170.0, 110.0),
            Vec2::new(80.0, 40.0),
        );
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::new(-1.0, 0.0));
        assert!((result.penetration - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_rect_rect_touching_is_miss() {
        let result = rect_rect(
            Vec2::ZERO,
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_resolve_self_circle_moves_only_self() {
        let mut a = circle_at(1, Vec2::new(100.0, 100.0), 30.0);
        let b = circle_at(2, Vec2::new(110.0, 100.0), 30.0);
        a.vel = Vec2::new(20.0, 0.0);

        assert!(resolve_self(&mut a, &b, 0.9));
        // Half of the 50 unit penetration, away from b
        assert!((a.center() - Vec2::new(75.0, 100.0)).length() < 1e-4);
        assert!((b.center() - Vec2::new(110.0, 100.0)).length() < 1e-6);
        assert!((a.vel - Vec2::new(-18.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_resolve_self_rect_backs_out_against_travel() {
        let mut a = rect_at(1, Vec2::new(100.0, 100.0), 80.0, 40.0);
        let b = rect_at(2, Vec2::new(170.0, 110.0), 80.0, 40.0);
        a.vel = Vec2::new(50.0, 5.0);

        assert!(resolve_self(&mut a, &b, 0.9));
        assert!((a.pos.x - 90.0).abs() < 1e-4);
        assert_eq!(a.pos.y, 100.0);
        assert!((a.vel.x - (-45.0)).abs() < 1e-4);
        assert_eq!(a.vel.y, 5.0);
        assert!(!a.contact(&b).hit);
    }

    #[test]
    fn test_resolve_self_rect_zero_velocity_counts_positive() {
        let mut a = rect_at(1, Vec2::new(100.0, 100.0), 80.0, 40.0);
        let b = rect_at(2, Vec2::new(170.0, 110.0), 80.0, 40.0);

        assert!(resolve_self(&mut a, &b, 0.9));
        assert!((a.pos.x - 90.0).abs() < 1e-4);
        assert_eq!(a.vel, Vec2::ZERO);
    }

    #[test]
    fn test_resolve_mutual_circles_fully_separate() {
        let mut a = circle_at(1, Vec2::new(100.0, 100.0), 30.0);
        let mut b = circle_at(2, Vec2::new(110.0, 100.0), 30.0);

        assert!(resolve_mutual(&mut a, &mut b, 0.9));
        let distance = a.center().distance(b.center());
        assert!((distance - 60.0).abs() < 1e-4);
        // Second pass finds nothing
        assert!(!resolve_mutual(&mut a, &mut b, 0.9));
    }

    #[test]
    fn test_resolve_mutual_rects_split_overlap() {
        let mut a = rect_at(1, Vec2::new(100.0, 100.0), 80.0, 40.0);
        let mut b = rect_at(2, Vec2::new(170.0, 110.0), 80.0, 40.0);
        a.vel = Vec2::new(10.0, 0.0);
        b.vel = Vec2::new(-10.0, 0.0);

        assert!(resolve_mutual(&mut a, &mut b, 0.9));
        assert!((a.pos.x - 95.0).abs() < 1e-4);
        assert!((b.pos.x - 175.0).abs() < 1e-4);
        assert_eq!(a.pos.y, 100.0);
        assert_eq!(b.pos.y, 110.0);
        assert!((a.vel.x + 9.0).abs() < 1e-4);
        assert!((b.vel.x - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_resolve_ignores_cross_kind() {
        let mut circle = circle_at(1, Vec2::new(100.0, 100.0), 30.0);
        let rect = rect_at(2, Vec2::new(90.0, 90.0), 80.0, 40.0);
        let before = circle.pos;

        assert!(!resolve_self(&mut circle, &rect, 0.9));
        assert_eq!(circle.pos, before);
    }
}
