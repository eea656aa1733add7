//! Initial shape layouts
//!
//! A scene is a list of shapes to create: geometry, where to put them and
//! what color to show them in.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::sim::{ArenaSurface, Geometry, ShapeId, World};

/// Uniform in `[0, hi)`, or zero when there is no room
fn random_upto(hi: f32, rng: &mut Pcg32) -> f32 {
    if hi > 0.0 { rng.random_range(0.0..hi) } else { 0.0 }
}

/// One shape to create
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub geometry: Geometry,
    /// Top-left of the bounding box
    pub position: Vec2,
    pub color: Color,
}

impl ShapeSpec {
    pub fn circle(x: f32, y: f32) -> Self {
        Self {
            geometry: Geometry::circle(CIRCLE_RADIUS),
            position: Vec2::new(x, y),
            color: Color::LIGHT_BLUE,
        }
    }

    pub fn rectangle(x: f32, y: f32) -> Self {
        Self {
            geometry: Geometry::rectangle(RECT_WIDTH, RECT_HEIGHT),
            position: Vec2::new(x, y),
            color: Color::LIGHT_GREEN,
        }
    }
}

/// A set of shapes to spawn together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub shapes: Vec<ShapeSpec>,
}

impl Scene {
    /// Two circles and two rectangles
    pub fn classic() -> Self {
        Self {
            shapes: vec![
                ShapeSpec::circle(60.0, 60.0),
                ShapeSpec::circle(150.0, 150.0),
                ShapeSpec::rectangle(200.0, 200.0),
                ShapeSpec::rectangle(300.0, 100.0),
            ],
        }
    }

    /// `count` random shapes inside `arena`, reproducible from `seed`
    pub fn scattered(seed: u64, count: usize, arena: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let palette = [
            Color::LIGHT_BLUE,
            Color::LIGHT_GREEN,
            Color::RED,
            Color::CYAN,
            Color::PEACH_PUFF,
            Color::HOT_PINK,
        ];

        let shapes = (0..count)
            .map(|_| {
                let geometry = if rng.random_bool(0.5) {
                    Geometry::circle(rng.random_range(10.0..40.0))
                } else {
                    Geometry::rectangle(rng.random_range(20.0..100.0), rng.random_range(20.0..60.0))
                };
                let limit = arena - geometry.extent();
                let position = Vec2::new(random_upto(limit.x, &mut rng), random_upto(limit.y, &mut rng));
                let color = palette[rng.random_range(0..palette.len())];
                ShapeSpec {
                    geometry,
                    position,
                    color,
                }
            })
            .collect();

        Self { shapes }
    }

    /// Create every shape in `world`, publishing positions and colors
    pub fn spawn<S: ArenaSurface>(&self, world: &mut World, surface: &mut S) -> Vec<ShapeId> {
        let ids: Vec<ShapeId> = self
            .shapes
            .iter()
            .map(|spec| {
                let id = world.spawn_at(spec.geometry, spec.position, surface);
                world.change_color(id, spec.color, surface);
                id
            })
            .collect();
        log::info!("spawned {} shapes", ids.len());
        ids
    }
}
