//! Physics core
//!
//! Everything that moves a shape lives here. The rules:
//! - Entities are owned by the `World` and addressed by `ShapeId`
//! - Only circle/circle and rectangle/rectangle pairs ever collide
//! - A dragged entity is written by the drag controller only
//! - No rendering or platform dependencies; positions are pushed to an `ArenaSurface`

pub mod boundary;
pub mod clock;
pub mod collision;
pub mod drag;
pub mod integrate;
pub mod scheduler;
pub mod shape;
pub mod surface;
pub mod world;

pub use boundary::{clamp_into_arena, resolve_boundary};
pub use clock::{Clock, ManualClock, MonotonicClock, TickClock};
pub use collision::{CollisionResult, reflect_velocity, resolve_mutual, resolve_self};
pub use drag::{DragState, PointerEvent, PointerPhase};
pub use integrate::integrate;
pub use scheduler::TickScheduler;
pub use shape::{Circle, Collider, Geometry, GeometryKind, Rect, ShapeEntity, ShapeId};
pub use surface::{ArenaSurface, HeadlessSurface};
pub use world::World;
