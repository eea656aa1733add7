//! Physics and scheduler settings
//!
//! Loaded from a JSON file by the native runner. Missing fields take their
//! defaults; nonsensical values are replaced with defaults on load.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::gravity_vector;

/// How wall-clock time is turned into physics steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScheduleMode {
    /// One clock, fixed timestep, all shapes advance together
    #[default]
    Shared,
    /// Each shape has its own clock and steps with its measured elapsed time
    PerEntity,
}

impl ScheduleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleMode::Shared => "shared",
            ScheduleMode::PerEntity => "per-entity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shared" | "fixed" => Some(ScheduleMode::Shared),
            "per-entity" | "per_entity" | "perentity" => Some(ScheduleMode::PerEntity),
            _ => None,
        }
    }
}

/// How an overlapping pair is corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CollisionMode {
    /// Only the shape being stepped moves; its partner corrects itself on
    /// its own step
    SelfOnly,
    /// Both shapes are pushed apart and bounce in the same call
    #[default]
    Mutual,
}

impl CollisionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionMode::SelfOnly => "self-only",
            CollisionMode::Mutual => "mutual",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "self-only" | "self_only" | "selfonly" | "self" => Some(CollisionMode::SelfOnly),
            "mutual" => Some(CollisionMode::Mutual),
            _ => None,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Velocity multiplier on every bounce (0.0 - 1.0)
    pub bounce: f32,
    /// Pair correction strategy
    pub collisions: CollisionMode,

    // === Scheduling ===
    pub schedule: ScheduleMode,
    /// Tick cadence in seconds
    pub tick_interval: f32,
    /// Max fixed steps per advance (shared mode)
    pub max_substeps: u32,
    /// Longest slice of wall time a single advance accounts for
    pub max_frame_dt: f32,

    // === Arena (native runner) ===
    pub arena_width: f32,
    pub arena_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce: BOUNCE,
            collisions: CollisionMode::Mutual,

            schedule: ScheduleMode::Shared,
            tick_interval: TICK_INTERVAL,
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: MAX_FRAME_DT,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
        }
    }
}

impl Settings {
    /// Per-shape clocks and one-sided collision correction
    pub fn parity() -> Self {
        Self {
            schedule: ScheduleMode::PerEntity,
            collisions: CollisionMode::SelfOnly,
            ..Self::default()
        }
    }

    pub fn gravity_vector(&self) -> Vec2 {
        gravity_vector(self.gravity)
    }

    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Replace out-of-range values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.gravity.is_finite() {
            log::warn!("gravity {} is not finite, using {}", self.gravity, defaults.gravity);
            self.gravity = defaults.gravity;
        }
        if !(self.bounce.is_finite() && (0.0..=1.0).contains(&self.bounce)) {
            log::warn!("bounce {} outside [0, 1], using {}", self.bounce, defaults.bounce);
            self.bounce = defaults.bounce;
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            log::warn!(
                "tick_interval {} must be positive, using {}",
                self.tick_interval,
                defaults.tick_interval
            );
            self.tick_interval = defaults.tick_interval;
        }
        if self.max_substeps == 0 {
            log::warn!("max_substeps must be at least 1");
            self.max_substeps = 1;
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt >= self.tick_interval) {
            log::warn!(
                "max_frame_dt {} shorter than a tick, using {}",
                self.max_frame_dt,
                defaults.max_frame_dt.max(self.tick_interval)
            );
            self.max_frame_dt = defaults.max_frame_dt.max(self.tick_interval);
        }
        if !(self.arena_width.is_finite() && self.arena_width > 0.0) {
            self.arena_width = defaults.arena_width;
        }
        if !(self.arena_height.is_finite() && self.arena_height > 0.0) {
            self.arena_height = defaults.arena_height;
        }

        self
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
