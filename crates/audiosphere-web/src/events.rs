use crate::audio::AudioGraph;
use crate::dom;
use crate::loader::{self, Sessions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// First file of a file input's current selection, if any.
#[inline]
pub fn selected_file(input: &web::HtmlInputElement) -> Option<web::File> {
    input.files().and_then(|list| list.get(0))
}

// Hand each picked file to the loader; an empty selection is ignored.
pub fn wire_file_input(input: web::HtmlInputElement, graph: AudioGraph, sessions: Sessions) {
    let input_change = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(file) = selected_file(&input_change) else {
            return;
        };
        // The change event is a user gesture, so the context may resume here.
        graph.resume();
        spawn_local(loader::load_file(graph.clone(), sessions.clone(), file));
    }) as Box<dyn FnMut(_)>);
    if let Err(e) = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref()) {
        log::warn!("[events] file input listener failed: {:?}", e);
    }
    closure.forget();
}

// Keep the canvas backing store in sync with the window size
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        if let Err(e) = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] resize listener failed: {:?}", e);
        }
    }
    resize_closure.forget();
}
