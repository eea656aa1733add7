//! Pointer drag state machine
//!
//! Idle --Down--> Dragging{offset} --Move--> Dragging --Up--> Idle
//!
//! While dragging, the pointer is the only thing that moves the shape.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary::clamp_into_arena;
use super::shape::{ShapeEntity, ShapeId};

/// Drag state of one shape. The offset only exists while dragging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer position minus shape position, captured on press
    Dragging { offset: Vec2 },
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn offset(&self) -> Option<Vec2> {
        match self {
            DragState::Dragging { offset } => Some(*offset),
            DragState::Idle => None,
        }
    }
}

/// Pointer button/motion phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer message routed to one shape by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub target: ShapeId,
    pub phase: PointerPhase,
    /// Pointer position in arena coordinates
    pub at: Vec2,
}

impl PointerEvent {
    pub fn down(target: ShapeId, at: Vec2) -> Self {
        Self {
            target,
            phase: PointerPhase::Down,
            at,
        }
    }

    pub fn moved(target: ShapeId, at: Vec2) -> Self {
        Self {
            target,
            phase: PointerPhase::Move,
            at,
        }
    }

    pub fn up(target: ShapeId, at: Vec2) -> Self {
        Self {
            target,
            phase: PointerPhase::Up,
            at,
        }
    }
}

/// What a pointer event did to a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    Ignored,
    Started,
    Moved,
    Released,
}

/// Feed one pointer phase to a shape.
///
/// `arena` bounds the dragged position; `now` restarts the shape's tick
/// clock on release so the time spent dragging is never simulated.
pub fn handle_pointer(
    shape: &mut ShapeEntity,
    phase: PointerPhase,
    at: Vec2,
    arena: Vec2,
    now: f64,
) -> DragTransition {
    match (phase, shape.drag) {
        (PointerPhase::Down, DragState::Idle) => {
            shape.drag = DragState::Dragging {
                offset: at - shape.pos,
            };
            log::debug!("shape {} drag start at {:?}", shape.id, at);
            DragTransition::Started
        }
        (PointerPhase::Move, DragState::Dragging { offset }) => {
            let target = at - offset;
            shape.pos = clamp_into_arena(target, shape.extent(), arena);
            DragTransition::Moved
        }
        (PointerPhase::Up, DragState::Dragging { .. }) => {
            shape.drag = DragState::Idle;
            shape.clock.restart(now);
            log::debug!("shape {} drag end at {:?}", shape.id, shape.pos);
            DragTransition::Released
        }
        _ => DragTransition::Ignored,
    }
}
