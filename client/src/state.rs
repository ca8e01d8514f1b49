use shapeboard_shared::{PointerGate, Sketch, Submission, SurfaceConfig};

use crate::render::CanvasSurface;

pub struct State {
    pub surface: CanvasSurface,
    pub sketch: Sketch,
    pub pointer: PointerGate,
    pub config: SurfaceConfig,
    pub label: String,
    pub endpoint: String,
    pub debug: bool,
}

impl State {
    pub fn submission(&self) -> Submission {
        self.sketch.submission(&self.label)
    }
}
