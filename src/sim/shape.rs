//! Shape entities and their geometry
//!
//! A shape is a shared physics record plus an immutable geometry variant.
//! Position is always the top-left corner of the bounding box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::TickClock;
use super::collision::{CollisionResult, circle_circle, rect_rect};
use super::drag::DragState;

/// Identifier of a shape inside a `World`
pub type ShapeId = u32;

/// Geometry capabilities needed by the boundary and pair resolvers
pub trait Collider {
    /// Size of the axis-aligned bounding box
    fn extent(&self) -> Vec2;

    /// Contact of this shape at `pos` against `other` at `other_pos`.
    /// The normal points from `other` toward this shape.
    fn contact(&self, pos: Vec2, other: &Self, other_pos: Vec2) -> CollisionResult;

    /// Whether the two shapes overlap
    fn overlaps(&self, pos: Vec2, other: &Self, other_pos: Vec2) -> bool {
        self.contact(pos, other, other_pos).hit
    }
}

#[inline]
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Unchecked circle fields, validated on deserialize
#[derive(Deserialize)]
struct RawCircle {
    radius: f32,
}

/// Unchecked rectangle fields, validated on deserialize
#[derive(Deserialize)]
struct RawRect {
    width: f32,
    height: f32,
}

/// A circle, positioned by its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    pub radius: f32,
}

impl Circle {
    pub fn new(radius: f32) -> Self {
        assert!(positive(radius), "Circle radius must be positive and finite");
        Self { radius }
    }
}

impl TryFrom<RawCircle> for Circle {
    type Error = String;

    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        if positive(raw.radius) {
            Ok(Self { radius: raw.radius })
        } else {
            Err(format!("circle radius {} must be positive and finite", raw.radius))
        }
    }
}

impl Collider for Circle {
    #[inline]
    fn extent(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }

    fn contact(&self, pos: Vec2, other: &Self, other_pos: Vec2) -> CollisionResult {
        circle_circle(
            pos + Vec2::splat(self.radius),
            self.radius,
            other_pos + Vec2::splat(other.radius),
            other.radius,
        )
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRect")]
pub struct Rect {
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            positive(width) && positive(height),
            "Rectangle dimensions must be positive and finite"
        );
        Self { width, height }
    }
}

impl TryFrom<RawRect> for Rect {
    type Error = String;

    fn try_from(raw: RawRect) -> Result<Self, Self::Error> {
        if positive(raw.width) && positive(raw.height) {
            Ok(Self {
                width: raw.width,
                height: raw.height,
            })
        } else {
            Err(format!(
                "rectangle {}x{} must have positive, finite sides",
                raw.width, raw.height
            ))
        }
    }
}

impl Collider for Rect {
    #[inline]
    fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn contact(&self, pos: Vec2, other: &Self, other_pos: Vec2) -> CollisionResult {
        rect_rect(pos, self.extent(), other_pos, other.extent())
    }
}

/// Discriminant used to pair up shapes for collision scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Circle,
    Rectangle,
}

/// Shape geometry, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Circle(Circle),
    Rectangle(Rect),
}

impl Geometry {
    pub fn circle(radius: f32) -> Self {
        Geometry::Circle(Circle::new(radius))
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        Geometry::Rectangle(Rect::new(width, height))
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Circle(_) => GeometryKind::Circle,
            Geometry::Rectangle(_) => GeometryKind::Rectangle,
        }
    }

    /// Bounding box size: (w, h) for rectangles, (2r, 2r) for circles
    pub fn extent(&self) -> Vec2 {
        match self {
            Geometry::Circle(c) => c.extent(),
            Geometry::Rectangle(r) => r.extent(),
        }
    }

    /// Contact between two placed geometries. Cross-kind pairs never collide.
    pub fn contact(&self, pos: Vec2, other: &Geometry, other_pos: Vec2) -> CollisionResult {
        match (self, other) {
            (Geometry::Circle(a), Geometry::Circle(b)) => a.contact(pos, b, other_pos),
            (Geometry::Rectangle(a), Geometry::Rectangle(b)) => a.contact(pos, b, other_pos),
            _ => CollisionResult::miss(),
        }
    }
}

/// One simulated shape
#[derive(Debug, Clone)]
pub struct ShapeEntity {
    pub id: ShapeId,
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub drag: DragState,
    /// Instant of the last physics step applied to this shape
    pub clock: TickClock,
    geometry: Geometry,
}

impl ShapeEntity {
    pub fn new(id: ShapeId, geometry: Geometry) -> Self {
        Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            drag: DragState::Idle,
            clock: TickClock::default(),
            geometry,
        }
    }

    /// Place the shape at rest and drop any drag in progress.
    ///
    /// The tick clock is stopped, so the next trigger restarts it instead
    /// of stepping with time measured before the reset.
    pub fn initialize(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.drag = DragState::Idle;
        self.clock.stop();
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.geometry.extent()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + self.extent() * 0.5
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Contact of this shape against `other`, normal pointing toward `self`
    pub fn contact(&self, other: &ShapeEntity) -> CollisionResult {
        self.geometry.contact(self.pos, &other.geometry, other.pos)
    }
}
