use crate::{Point, Stroke, Submission};

/// Immediate-mode target for live stroke feedback.
pub trait Surface {
    fn draw_segment(&mut self, from: Point, to: Point);
    fn clear(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawMode {
    Idle,
    Drawing { last: Point },
}

/// Pointer tracking plus the strokes captured since the last clear.
///
/// Coordinates arrive as `Option<Point>`; `None` means the surface could not
/// resolve the pointer (not mounted) and the event is dropped without effect.
#[derive(Debug)]
pub struct Sketch {
    mode: DrawMode,
    strokes: Vec<Stroke>,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch {
    pub fn new() -> Self {
        Self {
            mode: DrawMode::Idle,
            strokes: Vec::new(),
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.mode, DrawMode::Drawing { .. })
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Opens a new, empty stroke. The press position only anchors the first
    /// rendered segment.
    pub fn press(&mut self, at: Option<Point>) -> bool {
        let Some(point) = at else {
            return false;
        };
        self.mode = DrawMode::Drawing { last: point };
        self.strokes.push(Stroke::new());
        true
    }

    pub fn move_to(&mut self, at: Option<Point>, surface: &mut impl Surface) -> bool {
        let DrawMode::Drawing { last } = self.mode else {
            return false;
        };
        let Some(point) = at else {
            return false;
        };
        let Some(stroke) = self.strokes.last_mut() else {
            return false;
        };
        surface.draw_segment(last, point);
        self.mode = DrawMode::Drawing { last: point };
        stroke.push(point);
        true
    }

    /// Release and leave share this transition.
    pub fn release(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        self.mode = DrawMode::Idle;
        was_drawing
    }

    pub fn clear(&mut self, surface: &mut impl Surface) {
        self.strokes.clear();
        surface.clear();
    }

    /// A resized bitmap loses its pixels, so the strokes go with it.
    pub fn resize(&mut self, surface: &mut impl Surface) {
        self.clear(surface);
    }

    pub fn submission(&self, label: &str) -> Submission {
        Submission::new(self.strokes.clone(), label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        segments: Vec<(Point, Point)>,
        clears: usize,
    }

    impl Surface for RecordingSurface {
        fn draw_segment(&mut self, from: Point, to: Point) {
            self.segments.push((from, to));
        }

        fn clear(&mut self) {
            self.segments.clear();
            self.clears += 1;
        }
    }

    fn p(x: f64, y: f64) -> Option<Point> {
        Some(Point::new(x, y))
    }

    fn points(sketch: &Sketch) -> Vec<Vec<(f64, f64)>> {
        sketch
            .strokes()
            .iter()
            .map(|stroke| stroke.points().iter().map(|pt| (pt.x, pt.y)).collect())
            .collect()
    }

    #[test]
    fn moves_append_in_order() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(0.0, 0.0));
        for i in 1..=7 {
            assert!(sketch.move_to(p(i as f64, 2.0 * i as f64), &mut surface));
        }
        sketch.release();

        assert_eq!(sketch.strokes().len(), 1);
        let expected: Vec<(f64, f64)> = (1..=7).map(|i| (i as f64, 2.0 * i as f64)).collect();
        assert_eq!(points(&sketch), vec![expected]);
        assert_eq!(surface.segments.len(), 7);
    }

    #[test]
    fn segments_chain_from_press_position() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(10.0, 10.0));
        sketch.move_to(p(20.0, 10.0), &mut surface);
        sketch.move_to(p(20.0, 20.0), &mut surface);
        sketch.release();

        assert_eq!(
            surface.segments,
            vec![
                (Point::new(10.0, 10.0), Point::new(20.0, 10.0)),
                (Point::new(20.0, 10.0), Point::new(20.0, 20.0)),
            ]
        );
        assert_eq!(points(&sketch), vec![vec![(20.0, 10.0), (20.0, 20.0)]]);
        assert_eq!(sketch.mode(), DrawMode::Idle);
    }

    #[test]
    fn idle_moves_are_ignored() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        assert!(!sketch.move_to(p(1.0, 1.0), &mut surface));
        assert!(sketch.strokes().is_empty());

        sketch.press(p(0.0, 0.0));
        sketch.move_to(p(1.0, 1.0), &mut surface);
        sketch.release();
        assert!(!sketch.move_to(p(9.0, 9.0), &mut surface));

        assert_eq!(points(&sketch), vec![vec![(1.0, 1.0)]]);
        assert_eq!(surface.segments.len(), 1);
    }

    #[test]
    fn zero_length_strokes_are_kept() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(3.0, 3.0));
        sketch.release();
        sketch.press(p(4.0, 4.0));
        sketch.move_to(p(5.0, 5.0), &mut surface);
        sketch.release();

        assert_eq!(points(&sketch), vec![vec![], vec![(5.0, 5.0)]]);
    }

    #[test]
    fn unavailable_coordinates_do_nothing() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        assert!(!sketch.press(None));
        assert_eq!(sketch.mode(), DrawMode::Idle);
        assert!(sketch.strokes().is_empty());

        sketch.press(p(1.0, 1.0));
        assert!(!sketch.move_to(None, &mut surface));
        assert!(!sketch.press(None));
        assert_eq!(sketch.mode(), DrawMode::Drawing { last: Point::new(1.0, 1.0) });
        assert_eq!(points(&sketch), vec![Vec::<(f64, f64)>::new()]);
        assert!(surface.segments.is_empty());
    }

    #[test]
    fn stroke_count_tracks_presses() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(0.0, 0.0));
        sketch.move_to(p(1.0, 0.0), &mut surface);
        // A second press without a release still opens a fresh stroke.
        sketch.press(p(5.0, 5.0));
        sketch.move_to(p(6.0, 5.0), &mut surface);
        sketch.release();
        sketch.press(p(9.0, 9.0));
        sketch.release();

        assert_eq!(sketch.strokes().len(), 3);
        assert_eq!(points(&sketch), vec![vec![(1.0, 0.0)], vec![(6.0, 5.0)], vec![]]);
        assert_eq!(
            surface.segments[1],
            (Point::new(5.0, 5.0), Point::new(6.0, 5.0))
        );
    }

    #[test]
    fn release_is_idempotent() {
        let mut sketch = Sketch::new();
        assert!(!sketch.release());
        sketch.press(p(0.0, 0.0));
        assert!(sketch.release());
        assert!(!sketch.release());
    }

    #[test]
    fn clear_empties_strokes_and_surface() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(0.0, 0.0));
        sketch.move_to(p(1.0, 1.0), &mut surface);
        sketch.release();
        sketch.clear(&mut surface);

        assert!(sketch.strokes().is_empty());
        assert!(surface.segments.is_empty());
        assert_eq!(surface.clears, 1);

        sketch.clear(&mut surface);
        assert!(sketch.strokes().is_empty());
        assert_eq!(surface.clears, 2);
    }

    #[test]
    fn clear_mid_stroke_keeps_tracking() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(0.0, 0.0));
        sketch.clear(&mut surface);
        assert!(sketch.is_drawing());
        assert!(!sketch.move_to(p(1.0, 1.0), &mut surface));
        assert!(sketch.strokes().is_empty());
    }

    #[test]
    fn resize_discards_strokes() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(0.0, 0.0));
        sketch.move_to(p(2.0, 2.0), &mut surface);
        sketch.release();
        sketch.resize(&mut surface);

        assert!(sketch.strokes().is_empty());
        assert_eq!(surface.clears, 1);
    }

    #[test]
    fn submission_is_a_snapshot() {
        let mut sketch = Sketch::new();
        let mut surface = RecordingSurface::default();

        sketch.press(p(0.0, 0.0));
        sketch.move_to(p(1.0, 1.0), &mut surface);
        sketch.move_to(p(2.0, 2.0), &mut surface);
        sketch.release();

        let submission = sketch.submission("circle");
        assert_eq!(submission.shape_type, "circle");
        assert_eq!(submission.strokes, sketch.strokes());
        assert!(submission.shape_id.is_none());
        assert!(submission.param_value.is_none());

        sketch.press(p(8.0, 8.0));
        sketch.clear(&mut surface);
        assert_eq!(submission.point_count(), 2);
        assert_eq!(submission.strokes.len(), 1);
    }
}
