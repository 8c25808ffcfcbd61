use crate::constants::TOGGLE_BUTTON_ID;
use crate::input::{self, KeyAction, PointerState};
use crate::{dom, overlay};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::TreeScene;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<TreeScene>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointer_release(&w, "pointerup");
    wire_pointer_release(&w, "pointerleave");
    wire_pointer_release(&w, "pointercancel");
}

#[inline]
fn client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        client_px(ev),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
fn canvas_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let drag_x = {
            let mut ps = w.pointer.borrow_mut();
            ps.update(client_px(&ev), pos, canvas_size(&w.canvas));
            ps.down = true;
            ps.drag_x
        };
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        w.scene.borrow_mut().drag_start(drag_x);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let (down, drag_x) = {
            let mut ps = w.pointer.borrow_mut();
            ps.update(client_px(&ev), pos, canvas_size(&w.canvas));
            (ps.down, ps.drag_x)
        };
        if down {
            w.scene.borrow_mut().drag_move(drag_x);
        }
    });
}

fn wire_pointer_release(w: &InputWiring, event: &'static str) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, event, move |ev: web::PointerEvent| {
        let was_down = std::mem::replace(&mut w.pointer.borrow_mut().down, false);
        if was_down {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
            w.scene.borrow_mut().drag_end();
            log::debug!("[input] {} ends drag", event);
        }
    });
}

fn toggle_tree(scene: &Rc<RefCell<TreeScene>>) {
    let state = scene.borrow_mut().toggle();
    log::info!("[scene] {}", state.status_label());
    if let Some(document) = dom::window_document() {
        overlay::sync_controls(&document, state);
    }
}

pub fn wire_toggle_button(document: &web::Document, scene: Rc<RefCell<TreeScene>>) {
    dom::add_click_listener(document, TOGGLE_BUTTON_ID, move || toggle_tree(&scene));
}

fn toggle_fullscreen(document: &web::Document, canvas: &web::HtmlCanvasElement) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Err(e) = canvas.request_fullscreen() {
        log::warn!("[input] fullscreen refused: {:?}", e);
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<TreeScene>>,
    canvas: &web::HtmlCanvasElement,
) {
    if ev.repeat() {
        return;
    }
    let key = ev.key();
    let Some(action) = input::action_for_key(key.as_str()) else {
        return;
    };
    match action {
        KeyAction::ToggleTree => {
            // keep Space from scrolling or clicking the focused button
            ev.prevent_default();
            toggle_tree(scene);
        }
        KeyAction::ToggleOverlay => {
            if let Some(document) = dom::window_document() {
                overlay::toggle(&document);
            }
        }
        KeyAction::ToggleFullscreen => {
            if let Some(document) = dom::window_document() {
                toggle_fullscreen(&document, canvas);
            }
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<TreeScene>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &scene, &canvas);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
