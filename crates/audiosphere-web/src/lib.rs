#![cfg(target_arch = "wasm32")]
use audiosphere_core::{Scene, SceneConfig, SessionManager, FFT_SIZE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod loader;
mod render;

const CANVAS_ID: &str = "app-canvas";
const FILE_INPUT_ID: &str = "file-input";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("audiosphere starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let file_input: web::HtmlInputElement = dom::element_by_id(&document, FILE_INPUT_ID)?;

    // Maintain canvas internal pixel size to match window size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    // Analyser exists before any file is chosen, so frames read silence until then
    let (graph, spectrum) = audio::build_graph(FFT_SIZE)?;
    let sessions: loader::Sessions = Rc::new(RefCell::new(SessionManager::new()));
    events::wire_file_input(file_input, graph.clone(), sessions);

    let config = SceneConfig::default();
    let mut scene = Scene::build(&config, &mut rand::thread_rng());
    scene.camera.set_viewport(dom::canvas_viewport(&canvas));

    let gpu = frame::init_gpu(&canvas, config.particle_count).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        audio: graph,
        spectrum,
        canvas,
        gpu,
        instances: Vec::with_capacity(config.particle_count),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
