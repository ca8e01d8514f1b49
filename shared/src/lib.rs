use serde::{Deserialize, Serialize};

mod config;
mod pointer;
mod sketch;

pub use config::{
    endpoint_url, flag_enabled, SurfaceConfig, DEFAULT_BACKGROUND, ENDPOINT_PORT,
    SEND_STROKES_PATH, VIEWPORT_MARGIN,
};
pub use pointer::PointerGate;
pub use sketch::{DrawMode, Sketch, Surface};

/// Surface-relative position in device pixels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Points captured between one press and the matching release, in capture
/// order. Serialized as a bare JSON array.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Request body for `POST /send_strokes`.
///
/// The classification fields are reserved for a labelling workflow that does
/// not exist yet. They are always written as `null` but kept on the wire so the
/// receiving service sees a stable shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Submission {
    pub strokes: Vec<Stroke>,
    pub shape_id: Option<serde_json::Value>,
    pub shape_type: String,
    pub shapetype_code: Option<serde_json::Value>,
    pub params_to_vary: Option<serde_json::Value>,
    pub param_value: Option<serde_json::Value>,
}

impl Submission {
    pub fn new(strokes: Vec<Stroke>, label: impl Into<String>) -> Self {
        Self {
            strokes,
            shape_id: None,
            shape_type: label.into(),
            shapetype_code: None,
            params_to_vary: None,
            param_value: None,
        }
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}
