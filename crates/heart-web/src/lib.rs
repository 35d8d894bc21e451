#![cfg(target_arch = "wasm32")]
use heart_core::{signal_for, HeartParams, Signal, Step};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod mount;
mod raf;
mod render;
mod scene;

use constants::INERT_MOUNT_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");
    Ok(())
}

/// Handle to one activation of the celebration effect.
#[wasm_bindgen]
pub struct Celebration {
    id: u64,
}

#[wasm_bindgen]
impl Celebration {
    /// Tear the effect down. Safe to call repeatedly.
    pub fn deactivate(&self) {
        mount::deactivate(self.id);
    }

    pub fn is_active(&self) -> bool {
        self.id != INERT_MOUNT_ID && mount::is_active(self.id)
    }
}

/// Activation signal: mount the heart field inside `#container_id`.
///
/// Never rejects for rendering problems: when WebGPU is unavailable or setup
/// fails, the effect is skipped and an inactive handle is returned.
#[wasm_bindgen]
pub async fn activate(container_id: String) -> Result<Celebration, JsValue> {
    let id = match mount::activate(&container_id, HeartParams::default()).await {
        Ok(Some(id)) => id,
        Ok(None) => INERT_MOUNT_ID,
        Err(e) => {
            log::warn!("celebration effect skipped: {:?}", e);
            INERT_MOUNT_ID
        }
    };
    Ok(Celebration { id })
}

/// Deactivation signal for whichever instance is active (or still activating).
#[wasm_bindgen]
pub fn deactivate_all() {
    mount::deactivate_all();
}

/// Forward a step change from the page flow; entering "success" activates the
/// effect in `#container_id`, leaving it deactivates.
#[wasm_bindgen]
pub fn on_step_change(from: &str, to: &str, container_id: String) {
    let (Some(from), Some(to)) = (Step::from_name(from), Step::from_name(to)) else {
        log::warn!("unknown step change {:?} -> {:?}", from, to);
        return;
    };
    match signal_for(from, to) {
        Some(Signal::Activate) => spawn_local(async move {
            if let Err(e) = activate(container_id).await {
                log::error!("activate error: {:?}", e);
            }
        }),
        Some(Signal::Deactivate) => deactivate_all(),
        None => {}
    }
}
