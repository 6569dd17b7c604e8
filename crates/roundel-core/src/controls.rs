//! Maps discrete UI control events onto transform operations.

use std::fmt;
use std::str::FromStr;

use crate::consts::{ROTATION_STEP_DEGREES, SCALE_STEP};
use crate::error::{Result, RoundelError};
use crate::session::Session;
use crate::state::TransformState;

/// A control event as emitted by sliders, buttons and pointer gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    /// Absolute zoom slider position in percent (50..=200).
    ZoomSlider(f32),
    /// Absolute rotate slider position in degrees.
    RotateSlider(f32),
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    Reset,
    /// Pointer pressed at preview-canvas coordinates.
    DragStart { x: f32, y: f32 },
    DragMove { x: f32, y: f32 },
    /// Pointer released or left the preview.
    DragEnd,
}

/// Tracks the pointer between drag events and forwards every event to the
/// session as one transform operation.
#[derive(Clone, Debug, Default)]
pub struct GestureAdapter {
    last_pointer: Option<(f32, f32)>,
}

impl GestureAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    /// Apply `event` to `session`. Returns `true` when the transform changed
    /// and the preview was redrawn.
    pub fn handle(&mut self, session: &mut Session, event: ControlEvent) -> Result<bool> {
        match event {
            ControlEvent::ZoomSlider(percent) => {
                session.update(|s| s.set_scale(percent / 100.0))?
            }
            ControlEvent::RotateSlider(degrees) => session.update(|s| s.set_rotation(degrees))?,
            ControlEvent::ZoomIn => session.update(|s| s.adjust_scale(SCALE_STEP))?,
            ControlEvent::ZoomOut => session.update(|s| s.adjust_scale(-SCALE_STEP))?,
            ControlEvent::RotateLeft => {
                session.update(|s| s.adjust_rotation(-ROTATION_STEP_DEGREES))?
            }
            ControlEvent::RotateRight => {
                session.update(|s| s.adjust_rotation(ROTATION_STEP_DEGREES))?
            }
            ControlEvent::Reset => session.update(TransformState::reset)?,
            ControlEvent::DragStart { x, y } => {
                self.last_pointer = Some((x, y));
                return Ok(false);
            }
            ControlEvent::DragMove { x, y } => {
                // Moves without a preceding press are hover, not drag.
                let Some((last_x, last_y)) = self.last_pointer else {
                    return Ok(false);
                };
                self.last_pointer = Some((x, y));
                session.update(|s| s.translate_by(x - last_x, y - last_y))?
            }
            ControlEvent::DragEnd => {
                self.last_pointer = None;
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl FromStr for ControlEvent {
    type Err = RoundelError;

    /// Parse tokens such as `zoom-in`, `zoom:150`, `rotate:-30`,
    /// `drag-start:10,20`, `drag-move:15,18`, `drag-end`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid =
            |why: &str| RoundelError::Config(format!("invalid control event '{s}': {why}"));
        let number = |v: &str| {
            v.trim()
                .parse::<f32>()
                .map_err(|_| invalid("expected a number"))
        };
        let point = |v: &str| {
            let (x, y) = v.split_once(',').ok_or_else(|| invalid("expected x,y"))?;
            Ok::<_, RoundelError>((number(x)?, number(y)?))
        };

        let (name, arg) = match s.trim().split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s.trim(), None),
        };

        let event = match (name, arg) {
            ("zoom", Some(v)) => ControlEvent::ZoomSlider(number(v)?),
            ("rotate", Some(v)) => ControlEvent::RotateSlider(number(v)?),
            ("zoom-in", None) => ControlEvent::ZoomIn,
            ("zoom-out", None) => ControlEvent::ZoomOut,
            ("rotate-left", None) => ControlEvent::RotateLeft,
            ("rotate-right", None) => ControlEvent::RotateRight,
            ("reset", None) => ControlEvent::Reset,
            ("drag-start", Some(v)) => {
                let (x, y) = point(v)?;
                ControlEvent::DragStart { x, y }
            }
            ("drag-move", Some(v)) => {
                let (x, y) = point(v)?;
                ControlEvent::DragMove { x, y }
            }
            ("drag-end", None) => ControlEvent::DragEnd,
            _ => return Err(invalid("unknown event")),
        };
        Ok(event)
    }
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomSlider(v) => write!(f, "zoom:{v}"),
            Self::RotateSlider(v) => write!(f, "rotate:{v}"),
            Self::ZoomIn => write!(f, "zoom-in"),
            Self::ZoomOut => write!(f, "zoom-out"),
            Self::RotateLeft => write!(f, "rotate-left"),
            Self::RotateRight => write!(f, "rotate-right"),
            Self::Reset => write!(f, "reset"),
            Self::DragStart { x, y } => write!(f, "drag-start:{x},{y}"),
            Self::DragMove { x, y } => write!(f, "drag-move:{x},{y}"),
            Self::DragEnd => write!(f, "drag-end"),
        }
    }
}
