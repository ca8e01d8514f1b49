use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use shapeboard_shared::{Point, Sketch, SurfaceConfig};

use crate::state::State;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// An event subscription that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

pub fn query_param(window: &Window, key: &str) -> Option<String> {
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key).filter(|value| !value.is_empty())
}

pub fn surface_config(window: &Window, canvas: &HtmlCanvasElement) -> SurfaceConfig {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let config = SurfaceConfig::for_viewport(width, height);
    match canvas.get_attribute("data-background") {
        Some(color) => config.with_background(&color),
        None => config,
    }
}

/// Page coordinates minus the canvas offset. `None` once the canvas has left
/// the document.
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &Event) -> Option<Point> {
    if !canvas.is_connected() {
        return None;
    }
    let event = event.dyn_ref::<MouseEvent>()?;
    let x = event.page_x() - canvas.offset_left();
    let y = event.page_y() - canvas.offset_top();
    Some(Point::new(x as f64, y as f64))
}

pub fn resize_canvas(window: &Window, state: &mut State) {
    let next = surface_config(window, &state.surface.canvas);
    if next.same_size(&state.config) {
        state.surface.set_background(&next.background_color);
        state.config = next;
        return;
    }
    web_sys::console::log_1(
        &format!(
            "Resizing canvas from {}x{} to {}x{}",
            state.config.width, state.config.height, next.width, next.height
        )
        .into(),
    );
    state.surface.canvas.set_width(next.width);
    state.surface.canvas.set_height(next.height);
    state.surface.set_background(&next.background_color);
    state.config = next;

    let State {
        sketch, surface, ..
    } = state;
    let dropped = sketch.strokes().len();
    sketch.resize(surface);
    if dropped > 0 {
        web_sys::console::warn_1(&format!("Resize discarded {dropped} strokes").into());
    }
}

pub fn stroke_summary(sketch: &Sketch) -> String {
    let points: usize = sketch.strokes().iter().map(|stroke| stroke.len()).sum();
    format!("strokes={} points={points}", sketch.strokes().len())
}
