use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Event, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement,
    PointerEvent,
};

use shapeboard_shared::{flag_enabled, PointerGate, Sketch, SurfaceConfig};

use crate::dom::{
    event_to_point, get_element, query_param, resize_canvas, stroke_summary, Listener,
};
use crate::net::{endpoint, submit};
use crate::render::CanvasSurface;
use crate::state::State;

/// Everything the mounted board owns. Dropping it detaches every listener.
struct Mounted {
    _state: Rc<RefCell<State>>,
    _listeners: Vec<Listener>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

fn debug_enabled(window: &web_sys::Window) -> bool {
    flag_enabled(query_param(window, "debug").as_deref())
}

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

/// Detaches every listener and releases the board state.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    if mounted.is_some() {
        web_sys::console::log_1(&"Drawing board unmounted".into());
    }
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let debug = debug_enabled(&window);

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let submit_button: HtmlButtonElement = get_element(&document, "submit")?;
    let clear_button: HtmlButtonElement = get_element(&document, "clear")?;
    let label_input: HtmlInputElement = get_element(&document, "label")?;

    let state = Rc::new(RefCell::new(State {
        surface: CanvasSurface::new(canvas.clone(), ctx),
        sketch: Sketch::new(),
        pointer: PointerGate::new(),
        config: SurfaceConfig {
            width: canvas.width(),
            height: canvas.height(),
            ..SurfaceConfig::for_viewport(0.0, 0.0)
        },
        label: label_input.value(),
        endpoint: endpoint(&window)?,
        debug,
    }));

    {
        let mut state = state.borrow_mut();
        resize_canvas(&window, &mut state);
        web_sys::console::log_1(
            &format!(
                "Drawing board mounted {}x{} endpoint={}",
                state.config.width, state.config.height, state.endpoint
            )
            .into(),
        );
    }

    let mut listeners = Vec::new();

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        listeners.push(Listener::attach(&canvas, "pointerdown", move |event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let id = pointer.pointer_id();
            let mut state = down_state.borrow_mut();
            if !state.pointer.begin(id, pointer.is_primary()) {
                return;
            }
            let opened = state.sketch.press(event_to_point(&down_canvas, &event));
            if !opened {
                state.pointer.end(id);
            } else if state.debug {
                web_sys::console::log_1(
                    &format!("stroke:start #{}", state.sketch.strokes().len()).into(),
                );
            }
        })?);
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        listeners.push(Listener::attach(&canvas, "pointermove", move |event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let mut state = move_state.borrow_mut();
            if !state.pointer.accepts(pointer.pointer_id()) {
                return;
            }
            let State {
                sketch, surface, ..
            } = &mut *state;
            sketch.move_to(event_to_point(&move_canvas, &event), surface);
        })?);
    }

    {
        let stop_state = state.clone();
        let onstop = move |event: Event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let mut state = stop_state.borrow_mut();
            if !state.pointer.end(pointer.pointer_id()) {
                return;
            }
            if state.sketch.release() && state.debug {
                let points = state.sketch.strokes().last().map_or(0, |stroke| stroke.len());
                web_sys::console::log_1(&format!("stroke:end points={points}").into());
            }
        };
        listeners.push(Listener::attach(&canvas, "pointerup", onstop.clone())?);
        listeners.push(Listener::attach(&canvas, "pointerleave", onstop.clone())?);
        // A cancelled touch never sends pointerup; without this the gate stays
        // locked to a pointer that no longer exists.
        listeners.push(Listener::attach(&canvas, "pointercancel", onstop)?);
    }

    {
        let resize_state = state.clone();
        let window_cb = window.clone();
        listeners.push(Listener::attach(&window, "resize", move |_| {
            let mut state = resize_state.borrow_mut();
            resize_canvas(&window_cb, &mut state);
        })?);
    }

    {
        let clear_state = state.clone();
        listeners.push(Listener::attach(&clear_button, "click", move |_| {
            let mut state = clear_state.borrow_mut();
            let State {
                sketch, surface, ..
            } = &mut *state;
            web_sys::console::log_1(&format!("Clearing canvas {}", stroke_summary(sketch)).into());
            sketch.clear(surface);
        })?);
    }

    {
        let label_state = state.clone();
        let label_cb = label_input.clone();
        listeners.push(Listener::attach(&label_input, "input", move |_| {
            label_state.borrow_mut().label = label_cb.value();
        })?);
    }

    {
        let submit_state = state.clone();
        let window_cb = window.clone();
        listeners.push(Listener::attach(&submit_button, "click", move |_| {
            let (url, submission) = {
                let state = submit_state.borrow();
                (state.endpoint.clone(), state.submission())
            };
            submit(window_cb.clone(), url, submission);
        })?);
    }

    MOUNTED.with(|slot| {
        *slot.borrow_mut() = Some(Mounted {
            _state: state,
            _listeners: listeners,
        });
    });
    Ok(())
}
