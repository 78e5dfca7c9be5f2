use audiosphere_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to the expected type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Blocking user notification. Failure to show it is only logged.
pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Full-window viewport in physical pixels.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let css_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let css_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::from_css(css_w, css_h, window.device_pixel_ratio())
}

/// Current backing-store size of the canvas.
#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::from_css(canvas.width() as f64, canvas.height() as f64, 1.0)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let vp = window_viewport(&w);
        if canvas.width() != vp.width {
            canvas.set_width(vp.width);
        }
        if canvas.height() != vp.height {
            canvas.set_height(vp.height);
        }
    }
}
