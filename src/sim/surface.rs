//! The arena surface: whatever draws the shapes
//!
//! The simulation reads the arena size from it and pushes positions and
//! colors to it. It never calls back into the simulation.

use std::collections::HashMap;

use glam::Vec2;

use super::shape::ShapeId;
use crate::color::Color;

/// Rendering collaborator seen from the physics core
pub trait ArenaSurface {
    /// Current arena size. May change between ticks.
    fn extent(&self) -> Vec2;

    /// Where the surface currently shows a shape, if it knows it
    fn shape_position(&self, id: ShapeId) -> Option<Vec2>;

    /// Receive a shape's new position
    fn publish(&mut self, id: ShapeId, pos: Vec2);

    /// Receive a presentation color; no physical effect
    fn set_color(&mut self, id: ShapeId, color: Color);
}

/// In-memory surface for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    extent: Vec2,
    positions: HashMap<ShapeId, Vec2>,
    colors: HashMap<ShapeId, Color>,
    /// Number of position updates received
    pub publish_count: u64,
}

impl HeadlessSurface {
    pub fn new(extent: Vec2) -> Self {
        Self {
            extent,
            ..Default::default()
        }
    }

    /// Change the arena size, as a window resize would
    pub fn resize(&mut self, extent: Vec2) {
        log::info!("arena resized to {:?}", extent);
        self.extent = extent;
    }

    /// Move a shape from outside the simulation
    pub fn place(&mut self, id: ShapeId, pos: Vec2) {
        self.positions.insert(id, pos);
    }

    pub fn color(&self, id: ShapeId) -> Option<Color> {
        self.colors.get(&id).copied()
    }

    pub fn positions(&self) -> &HashMap<ShapeId, Vec2> {
        &self.positions
    }
}

impl ArenaSurface for HeadlessSurface {
    fn extent(&self) -> Vec2 {
        self.extent
    }

    fn shape_position(&self, id: ShapeId) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }

    fn publish(&mut self, id: ShapeId, pos: Vec2) {
        self.positions.insert(id, pos);
        self.publish_count += 1;
    }

    fn set_color(&mut self, id: ShapeId, color: Color) {
        self.colors.insert(id, color);
    }
}
