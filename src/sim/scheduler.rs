//! Tick scheduling
//!
//! Two ways to turn wall-clock time into physics steps:
//! - `Shared`: one accumulator, fixed `dt`, every shape steps together
//! - `PerEntity`: every shape owns a clock and steps with its own measured `dt`
//!
//! Pointer messages are drained once per `advance`, before any step.

use super::surface::ArenaSurface;
use super::world::World;
use crate::settings::{ScheduleMode, Settings};

/// Slack for comparing accumulated float time against the interval
const TIME_EPSILON: f64 = 1e-9;

/// Drives the world from a monotonic clock
#[derive(Debug, Clone)]
pub struct TickScheduler {
    mode: ScheduleMode,
    interval: f64,
    max_substeps: u32,
    max_frame_dt: f64,
    accumulator: f64,
    last_frame: Option<f64>,
    running: bool,
    /// Total physics steps issued (shape steps in per-entity mode)
    pub steps: u64,
}

impl TickScheduler {
    pub fn new(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        Self {
            mode: settings.schedule,
            interval: settings.tick_interval as f64,
            max_substeps: settings.max_substeps,
            max_frame_dt: settings.max_frame_dt as f64,
            accumulator: 0.0,
            last_frame: None,
            running: false,
            steps: 0,
        }
    }

    pub fn mode(&self) -> ScheduleMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start every trigger from `now`
    pub fn start(&mut self, world: &mut World, now: f64) {
        self.running = true;
        self.accumulator = 0.0;
        self.last_frame = Some(now);
        for id in world.ids() {
            if let Some(shape) = world.get_mut(id) {
                shape.clock.restart(now);
            }
        }
        log::info!("scheduler started ({})", self.mode.as_str());
    }

    /// Stop every trigger. Nothing steps until `start` is called again.
    pub fn stop(&mut self, world: &mut World) {
        self.running = false;
        self.accumulator = 0.0;
        self.last_frame = None;
        for id in world.ids() {
            if let Some(shape) = world.get_mut(id) {
                shape.clock.stop();
            }
        }
        log::info!("scheduler stopped after {} steps", self.steps);
    }

    /// Run whatever steps are due at `now`.
    ///
    /// Returns the number of steps issued: fixed steps in shared mode,
    /// shape steps in per-entity mode.
    pub fn advance<S: ArenaSurface>(&mut self, world: &mut World, surface: &mut S, now: f64) -> u32 {
        if !self.running {
            return 0;
        }

        world.drain_pointer_events(surface, now);

        let issued = match self.mode {
            ScheduleMode::Shared => self.advance_shared(world, surface, now),
            ScheduleMode::PerEntity => self.advance_per_entity(world, surface, now),
        };
        self.steps += issued as u64;
        issued
    }

    fn advance_shared<S: ArenaSurface>(&mut self, world: &mut World, surface: &mut S, now: f64) -> u32 {
        let last = self.last_frame.unwrap_or(now);
        let frame_dt = (now - last).clamp(0.0, self.max_frame_dt);
        self.last_frame = Some(now);
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator + TIME_EPSILON >= self.interval && substeps < self.max_substeps {
            world.step_all(self.interval as f32, surface, now);
            self.accumulator = (self.accumulator - self.interval).max(0.0);
            substeps += 1;
        }

        if substeps == self.max_substeps && self.accumulator >= self.interval {
            log::trace!("dropping {:.4}s of backlog", self.accumulator);
            self.accumulator %= self.interval;
        }

        substeps
    }

    fn advance_per_entity<S: ArenaSurface>(
        &mut self,
        world: &mut World,
        surface: &mut S,
        now: f64,
    ) -> u32 {
        let mut stepped = 0;

        for id in world.ids() {
            let Some(shape) = world.get_mut(id) else {
                continue;
            };
            if shape.is_dragging() {
                // Clock restarts on release
                continue;
            }

            let Some(elapsed) = shape.clock.elapsed(now) else {
                // First trigger only starts the clock
                shape.clock.restart(now);
                continue;
            };
            if elapsed + TIME_EPSILON < self.interval {
                continue;
            }

            let dt = elapsed.min(self.max_frame_dt) as f32;
            world.step_shape(id, dt, surface);
            if let Some(shape) = world.get_mut(id) {
                shape.clock.restart(now);
            }
            stepped += 1;
        }

        stepped
    }
}
