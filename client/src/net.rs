use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use shapeboard_shared::{endpoint_url, Submission, ENDPOINT_PORT};

use crate::dom::query_param;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to encode strokes: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Request(String),
    #[error("server answered {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("failed to read response body: {0}")]
    Body(String),
}

fn describe(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `?backend=<base>` wins; otherwise the recognition service is expected on
/// the page's host.
pub fn endpoint(window: &Window) -> Result<String, JsValue> {
    if let Some(base) = query_param(window, "backend") {
        return Ok(endpoint_url(&base));
    }
    let hostname = window.location().hostname()?;
    let hostname = if hostname.is_empty() {
        "localhost".to_string()
    } else {
        hostname
    };
    Ok(endpoint_url(&format!("http://{hostname}:{ENDPOINT_PORT}")))
}

pub async fn send_strokes(
    window: &Window,
    url: &str,
    submission: &Submission,
) -> Result<String, SubmitError> {
    let body = serde_json::to_string(submission)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|err| SubmitError::Request(describe(err)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| SubmitError::Request(describe(err)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| SubmitError::Request(describe(err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| SubmitError::Request(describe(err)))?;
    if !response.ok() {
        return Err(SubmitError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let text = response
        .text()
        .map_err(|err| SubmitError::Body(describe(err)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|err| SubmitError::Body(describe(err)))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Fire and forget. The outcome only reaches the developer console; drawing
/// state is never touched.
pub fn submit(window: Window, url: String, submission: Submission) {
    web_sys::console::log_1(
        &format!(
            "Sending {} strokes ({} points) label={:?} to {url}",
            submission.strokes.len(),
            submission.point_count(),
            submission.shape_type
        )
        .into(),
    );
    wasm_bindgen_futures::spawn_local(async move {
        match send_strokes(&window, &url, &submission).await {
            Ok(body) => web_sys::console::log_1(&body.into()),
            Err(error) => web_sys::console::error_1(
                &format!("Error sending strokes to the backend: {error}").into(),
            ),
        }
    });
}
