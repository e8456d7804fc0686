#![cfg(target_arch = "wasm32")]
//! Canvas-bound frontend for the atrium background scene.
//!
//! The host page owns the lifecycle: `create_scene` binds an existing
//! canvas, then `start`, `cinematic_intro` (a one-shot Promise), `resize`,
//! `stop` and `dispose` drive the engine. Losing the WebGPU adapter fails
//! `create_scene` cleanly so the page runs without the background.

use scene_core::{Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");
    Ok(())
}

#[wasm_bindgen]
pub struct SceneHandle {
    inner: Rc<RefCell<frame::Engine>>,
}

/// Bind the scene engine to the canvas with the given element id.
#[wasm_bindgen]
pub async fn create_scene(canvas_id: String) -> Result<SceneHandle, JsValue> {
    let canvas = dom::canvas_by_id(&canvas_id).map_err(to_js)?;
    dom::sync_canvas_backing_size(&canvas);

    // Particle budget keys off logical (CSS) width, not backing pixels.
    let rect = canvas.get_bounding_client_rect();
    let scene = Scene::new(SceneConfig {
        width: (rect.width() as u32).max(1),
        height: (rect.height() as u32).max(1),
        seed: js_sys::Date::now() as u64,
    });

    let gpu = render::GpuState::new(&canvas, &scene).await.map_err(to_js)?;

    let engine = Rc::new(RefCell::new(frame::Engine {
        scene,
        gpu: Some(gpu),
        canvas,
        started_at: instant::Instant::now(),
        loop_active: false,
        intro_waiters: Vec::new(),
    }));
    events::wire_input(&engine);
    Ok(SceneHandle { inner: engine })
}

#[wasm_bindgen]
impl SceneHandle {
    /// Begin the per-frame loop. Idempotent.
    pub fn start(&self) {
        let should_spawn = {
            let mut e = self.inner.borrow_mut();
            if e.loop_active || e.scene.is_disposed() {
                false
            } else {
                e.loop_active = true;
                e.scene.start();
                true
            }
        };
        if should_spawn {
            frame::start_loop(self.inner.clone());
        }
    }

    /// Halt the loop without releasing GPU resources. Idempotent.
    pub fn stop(&self) {
        let mut e = self.inner.borrow_mut();
        e.loop_active = false;
        e.scene.stop();
    }

    /// Play the one-shot camera flythrough; resolves when it completes.
    /// A second call while one is pending (or after it played) rejects.
    pub fn cinematic_intro(&self) -> js_sys::Promise {
        let begun = self.inner.borrow_mut().scene.begin_intro();
        match begun {
            Ok(()) => {
                let inner = self.inner.clone();
                js_sys::Promise::new(&mut move |resolve, reject| {
                    inner.borrow_mut().intro_waiters.push((resolve, reject));
                })
            }
            Err(e) => js_sys::Promise::reject(&JsValue::from_str(&e.to_string())),
        }
    }

    /// Update surface dimensions; safe to call at any time.
    pub fn resize(&self, width: u32, height: u32) {
        let mut e = self.inner.borrow_mut();
        e.scene.resize(width, height);
        if let Some(gpu) = &mut e.gpu {
            gpu.resize_if_needed(width, height);
        }
    }

    /// Stop the loop and release every GPU-side handle. Idempotent; the
    /// scene is unusable afterward.
    pub fn dispose(&self) {
        self.inner.borrow_mut().dispose();
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:?}"))
}
