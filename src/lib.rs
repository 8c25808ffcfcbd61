#![cfg(target_arch = "wasm32")]
//! Browser front-end: binds the page controls, pointer and keyboard to a
//! [`tree_core::TreeScene`] and draws it every animation frame through
//! WebGPU.

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{TreeParams, TreeScene};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let mut rng = StdRng::from_entropy();
    let scene = TreeScene::new(TreeParams::default(), &mut rng)?;
    log::info!(
        "[scene] foliage={} ornaments={} dust={}",
        scene.foliage().len(),
        scene.ornaments().len(),
        scene.dust_positions().len()
    );
    overlay::sync_controls(&document, scene.state());

    let renderer = frame::init_gpu(&canvas, &scene).await;
    if renderer.is_none() {
        overlay::show(&document);
    }

    let scene = Rc::new(RefCell::new(scene));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    events::wire_toggle_button(&document, scene.clone());
    events::wire_global_keydown(scene.clone(), canvas.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        pointer: pointer.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        pointer,
        canvas,
        renderer,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
