use heart_core::{FrameCallback, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler. Timestamps are converted to seconds.
///
/// Pending requests are never cancelled: a frame that fires after teardown sees
/// the dead liveness flag, does nothing and is not rescheduled, which also frees
/// its one-shot closure.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let tick = Closure::once_into_js(move |ts_ms: f64| callback(ts_ms / 1000.0));
        if let Err(e) = self.window.request_animation_frame(tick.unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
