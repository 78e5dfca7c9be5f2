use crate::audio::AudioGraph;
use crate::dom;
use crate::render;
use audiosphere_core::{pack_instances, ParticleInstance, Scene, Spectrum};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame update reads or writes, built once in `init`.
pub struct FrameContext {
    pub scene: Scene,
    pub audio: AudioGraph,
    pub spectrum: Spectrum,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub instances: Vec<ParticleInstance>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.audio.sample(&mut self.spectrum);
        self.scene.step(&self.spectrum);

        // Canvas backing size is kept in sync by the resize listener
        let viewport = dom::canvas_viewport(&self.canvas);
        self.scene.camera.set_viewport(viewport);

        match &self.scene.particles {
            Some(field) => pack_instances(field, self.scene.material.box_size, &mut self.instances),
            None => self.instances.clear(),
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(viewport);
            match g.render(
                &self.scene.camera,
                &self.scene.lighting,
                &self.scene.material,
                &self.instances,
            ) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instance_capacity: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
