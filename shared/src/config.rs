pub const DEFAULT_BACKGROUND: &str = "#faf3e1";
pub const VIEWPORT_MARGIN: f64 = 100.0;
pub const ENDPOINT_PORT: u16 = 5000;
pub const SEND_STROKES_PATH: &str = "/send_strokes";

#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
}

impl SurfaceConfig {
    /// Full viewport width, viewport height minus the control strip.
    pub fn for_viewport(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            width: to_pixels(viewport_width),
            height: to_pixels(viewport_height - VIEWPORT_MARGIN),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }

    pub fn with_background(mut self, color: &str) -> Self {
        let color = color.trim();
        if !color.is_empty() {
            self.background_color = color.to_string();
        }
        self
    }

    pub fn same_size(&self, other: &SurfaceConfig) -> bool {
        self.width == other.width && self.height == other.height
    }
}

fn to_pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value as u32
    } else {
        0
    }
}

/// Query-string switches such as `?debug=1`. Only an exact `1` or `true`
/// turns one on.
pub fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true"))
}

/// `base` is a scheme and authority such as `http://localhost:5000`.
pub fn endpoint_url(base: &str) -> String {
    format!("{}{SEND_STROKES_PATH}", base.trim_end_matches('/'))
}
