//! The simulation world
//!
//! Owns every shape by id and holds the queue of pointer messages waiting
//! for the next tick. Positions flow out to an `ArenaSurface`; nothing flows
//! back in except the arena size and explicit resynchronization.

use std::collections::VecDeque;

use glam::Vec2;

use super::boundary::{clamp_into_arena, resolve_boundary};
use super::collision::{resolve_mutual, resolve_self};
use super::drag::{DragTransition, PointerEvent, handle_pointer};
use super::integrate::integrate;
use super::shape::{Geometry, ShapeEntity, ShapeId};
use super::surface::ArenaSurface;
use crate::color::Color;
use crate::settings::{CollisionMode, Settings};

/// Borrow two distinct shapes mutably
fn pair_mut(
    shapes: &mut [ShapeEntity],
    i: usize,
    j: usize,
) -> (&mut ShapeEntity, &mut ShapeEntity) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = shapes.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = shapes.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

/// All live shapes plus pending input
#[derive(Debug, Clone)]
pub struct World {
    settings: Settings,
    /// Live shapes (sorted by id for deterministic iteration)
    shapes: Vec<ShapeEntity>,
    pending: VecDeque<PointerEvent>,
    /// Shape currently holding pointer capture
    captured: Option<ShapeId>,
    next_id: ShapeId,
}

impl World {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        log::info!(
            "world created: gravity {} bounce {} collisions {}",
            settings.gravity,
            settings.bounce,
            settings.collisions.as_str()
        );
        Self {
            settings,
            shapes: Vec::new(),
            pending: VecDeque::new(),
            captured: None,
            next_id: 1,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create a shape at the origin. Call `initialize` to place it.
    pub fn spawn(&mut self, geometry: Geometry) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        self.shapes.push(ShapeEntity::new(id, geometry));
        log::debug!("spawned shape {} ({:?})", id, geometry.kind());
        id
    }

    /// Create a shape and place it in one go
    pub fn spawn_at<S: ArenaSurface>(
        &mut self,
        geometry: Geometry,
        pos: Vec2,
        surface: &mut S,
    ) -> ShapeId {
        let id = self.spawn(geometry);
        self.initialize(id, pos, surface);
        id
    }

    /// Put a shape at rest at `pos` and show it there
    pub fn initialize<S: ArenaSurface>(&mut self, id: ShapeId, pos: Vec2, surface: &mut S) {
        let Some(shape) = self.get_mut(id) else {
            log::debug!("initialize: unknown shape {}", id);
            return;
        };
        shape.initialize(pos);
        surface.publish(id, pos);
        if self.captured == Some(id) {
            self.captured = None;
        }
    }

    /// Drop a shape. Only external collaborators remove shapes.
    pub fn remove(&mut self, id: ShapeId) -> Option<ShapeEntity> {
        let index = self.index_of(id)?;
        if self.captured == Some(id) {
            self.captured = None;
        }
        self.pending.retain(|event| event.target != id);
        Some(self.shapes.remove(index))
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.binary_search_by_key(&id, |s| s.id).ok()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeEntity> {
        self.index_of(id).map(|i| &self.shapes[i])
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeEntity> {
        self.index_of(id).map(|i| &mut self.shapes[i])
    }

    pub fn shapes(&self) -> &[ShapeEntity] {
        &self.shapes
    }

    /// Ids of every live shape, in ascending order
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape holding pointer capture, so moves can be routed to it
    pub fn captured(&self) -> Option<ShapeId> {
        self.captured
    }

    // === Pointer input ===

    pub fn push_pointer(&mut self, event: PointerEvent) {
        self.pending.push_back(event);
    }

    pub fn on_pointer_down(&mut self, id: ShapeId, at: Vec2) {
        self.push_pointer(PointerEvent::down(id, at));
    }

    pub fn on_pointer_move(&mut self, id: ShapeId, at: Vec2) {
        self.push_pointer(PointerEvent::moved(id, at));
    }

    pub fn on_pointer_up(&mut self, id: ShapeId, at: Vec2) {
        self.push_pointer(PointerEvent::up(id, at));
    }

    pub fn pending_pointer_events(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued pointer message in arrival order.
    ///
    /// Returns the number of messages that changed some shape.
    pub fn drain_pointer_events<S: ArenaSurface>(&mut self, surface: &mut S, now: f64) -> usize {
        let arena = surface.extent();
        let mut applied = 0;

        while let Some(event) = self.pending.pop_front() {
            let Some(index) = self.index_of(event.target) else {
                log::debug!("pointer {:?} for unknown shape {}", event.phase, event.target);
                continue;
            };
            let shape = &mut self.shapes[index];

            match handle_pointer(shape, event.phase, event.at, arena, now) {
                DragTransition::Ignored => continue,
                DragTransition::Started => self.captured = Some(event.target),
                DragTransition::Moved => surface.publish(shape.id, shape.pos),
                DragTransition::Released => {
                    if self.captured == Some(event.target) {
                        self.captured = None;
                    }
                }
            }
            applied += 1;
        }

        applied
    }

    // === Physics ===

    /// One physics step for one shape: integrate, walls, then every other
    /// shape of the same kind. Dragged shapes are left alone.
    ///
    /// Returns true if the shape was stepped.
    pub fn step_shape<S: ArenaSurface>(&mut self, id: ShapeId, dt: f32, surface: &mut S) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.shapes[index].is_dragging() {
            return false;
        }

        let arena = surface.extent();
        let gravity = self.settings.gravity_vector();
        let bounce = self.settings.bounce;

        {
            let shape = &mut self.shapes[index];
            integrate(shape, gravity, dt);
            resolve_boundary(shape, arena, bounce);
        }

        let kind = self.shapes[index].kind();
        for other in 0..self.shapes.len() {
            if other == index || self.shapes[other].kind() != kind {
                continue;
            }
            let (this, that) = pair_mut(&mut self.shapes, index, other);

            let mutual = self.settings.collisions == CollisionMode::Mutual && !that.is_dragging();
            if mutual {
                if resolve_mutual(this, that, bounce) {
                    that.pos = clamp_into_arena(that.pos, that.extent(), arena);
                    surface.publish(that.id, that.pos);
                }
            } else {
                resolve_self(this, that, bounce);
            }
        }

        let shape = &mut self.shapes[index];
        shape.pos = clamp_into_arena(shape.pos, shape.extent(), arena);
        surface.publish(shape.id, shape.pos);
        true
    }

    /// Step every shape with the same `dt`, in id order, and stamp the
    /// stepped shapes' clocks with `now`.
    ///
    /// Returns the number of shapes stepped.
    pub fn step_all<S: ArenaSurface>(&mut self, dt: f32, surface: &mut S, now: f64) -> usize {
        let mut stepped = 0;
        for id in self.ids() {
            if self.step_shape(id, dt, surface) {
                if let Some(shape) = self.get_mut(id) {
                    shape.clock.restart(now);
                }
                stepped += 1;
            }
        }
        stepped
    }

    /// Re-read a shape's position from the surface and restart its clock,
    /// after it was moved by something other than a drag.
    pub fn reset_state<S: ArenaSurface>(&mut self, id: ShapeId, surface: &S, now: f64) {
        let reported = surface.shape_position(id);
        let Some(shape) = self.get_mut(id) else {
            log::debug!("reset_state: unknown shape {}", id);
            return;
        };
        if let Some(pos) = reported {
            shape.pos = pos;
        }
        shape.clock.restart(now);
    }

    /// Forward a color to the surface. Physics never sees it.
    pub fn change_color<S: ArenaSurface>(&self, id: ShapeId, color: Color, surface: &mut S) {
        if self.index_of(id).is_none() {
            log::debug!("change_color: unknown shape {}", id);
            return;
        }
        surface.set_color(id, color);
    }

    /// Recolor every shape
    pub fn change_all_colors<S: ArenaSurface>(&self, color: Color, surface: &mut S) {
        for shape in &self.shapes {
            surface.set_color(shape.id, color);
        }
    }
}
