//! requestAnimationFrame loop and per-frame orchestration.
//!
//! One logical tick per display refresh: the scene simulation advances on
//! the shared clock, pending intro promises settle, then the frame is
//! submitted. The loop closure keeps rescheduling itself only while
//! `loop_active` holds, so `stop` and `dispose` let it wind down naturally.

use crate::render;
use instant::Instant;
use scene_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Engine {
    pub scene: Scene,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub started_at: Instant,
    pub loop_active: bool,
    /// (resolve, reject) pairs for pending `cinematic_intro` promises.
    pub intro_waiters: Vec<(js_sys::Function, js_sys::Function)>,
}

impl Engine {
    pub fn frame(&mut self) {
        let now = self.started_at.elapsed().as_secs_f64();
        self.scene.tick(now);

        if self.scene.intro_played() && !self.intro_waiters.is_empty() {
            for (resolve, _) in self.intro_waiters.drain(..) {
                let _ = resolve.call0(&JsValue::UNDEFINED);
            }
        }

        // Surface reconfiguration belongs to the resize paths (the window
        // listener and the explicit `resize` call); the frame only draws.
        if let Some(gpu) = &mut self.gpu {
            if let Err(e) = gpu.render(&self.scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Drop every GPU handle and the simulation buffers. Pending intro
    /// promises are rejected so callers are not left hanging.
    pub fn dispose(&mut self) {
        self.loop_active = false;
        for (_, reject) in self.intro_waiters.drain(..) {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("scene disposed"));
        }
        self.gpu = None;
        self.scene.dispose();
    }
}

pub fn start_loop(engine: Rc<RefCell<Engine>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let engine_tick = engine.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let active = {
            let mut e = engine_tick.borrow_mut();
            if e.loop_active {
                e.frame();
            }
            e.loop_active
        };
        if active {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
