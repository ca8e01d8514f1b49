use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use shapeboard_shared::{Point, Surface};

pub const STROKE_COLOR: &str = "red";
pub const LINE_WIDTH: f64 = 5.0;

/// The visible canvas bitmap. Nothing drawn here is read back.
pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn set_background(&self, color: &str) {
        let _ = self.canvas.style().set_property("background-color", color);
    }
}

impl Surface for CanvasSurface {
    fn draw_segment(&mut self, from: Point, to: Point) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(STROKE_COLOR);
        ctx.set_line_join("round");
        ctx.set_line_width(LINE_WIDTH);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }

    fn clear(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}
