//! DOM event wiring: pointer position, scroll fraction, and surface resize
//! all land in the scene's target slots and become visible next tick.

use crate::dom;
use crate::frame::Engine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input(engine: &Rc<RefCell<Engine>>) {
    let Some(window) = web::window() else {
        return;
    };

    {
        let engine = engine.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut e = engine.borrow_mut();
            let rect = e.canvas.get_bounding_client_rect();
            let px = ev.client_x() as f32 - rect.left() as f32;
            let py = ev.client_y() as f32 - rect.top() as f32;
            e.scene.input.set_pointer_from_pixels(
                px,
                py,
                rect.width() as f32,
                rect.height() as f32,
            );
        }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let engine = engine.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                let fraction = dom::scroll_fraction(&w);
                engine.borrow_mut().scene.input.set_scroll_target(fraction);
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let engine = engine.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut e = engine.borrow_mut();
            dom::sync_canvas_backing_size(&e.canvas);
            let (w, h) = (e.canvas.width(), e.canvas.height());
            e.scene.resize(w, h);
            if let Some(gpu) = &mut e.gpu {
                gpu.resize_if_needed(w, h);
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
