use crate::constants::MAX_FRAME_DT;
use crate::input::{self, PointerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::TreeScene;
use tree_render::Renderer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<TreeScene>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Option<Renderer<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = input::frame_dt((now - self.last_instant).as_secs_f32(), MAX_FRAME_DT);
        self.last_instant = now;

        let Some(renderer) = self.renderer.as_mut() else {
            self.scene.borrow_mut().tick(dt_sec);
            return;
        };

        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) != renderer.size() {
            renderer.resize(w, h);
        }

        let ndc = self.pointer.borrow().ndc;
        let attractor = renderer.camera().pointer_attractor(ndc);
        let mut scene = self.scene.borrow_mut();
        scene.set_pointer_target(Some(attractor));
        scene.tick(dt_sec);

        match renderer.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[render] out of memory, stopping renderer");
                self.renderer = None;
            }
            Err(e) => log::warn!("[render] frame skipped: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &TreeScene,
) -> Option<Renderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match Renderer::new(&instance, surface, canvas.width(), canvas.height(), scene).await {
        Ok(r) => Some(r),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
