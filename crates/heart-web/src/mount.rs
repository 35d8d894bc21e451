//! Activation and teardown of the celebration effect.
//!
//! At most one mount is alive. Every resource is held in an [`Owned`] handle,
//! so a failure halfway through activation, a superseding activation and a
//! regular deactivation all release what was acquired, exactly once.

use crate::dom::{self, AttachedCanvas, ResizeListener};
use crate::raf::RafScheduler;
use crate::render::GpuState;
use crate::scene::Scene;
use heart_core::{
    glow_sprite, sample_targets, start_loop, AnimationDriver, HeartParams, Liveness, Mounted,
    Owned, ParticleField,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Listener, canvas and scene of the active effect, torn down in that order
/// once frames have stopped.
type Mount = Mounted<ResizeListener, AttachedCanvas, Scene>;

thread_local! {
    static ACTIVE: RefCell<Option<(u64, Owned<Mount>)>> = const { RefCell::new(None) };
    static GENERATION: Cell<u64> = const { Cell::new(0) };
}

fn bump_generation() -> u64 {
    GENERATION.with(|g| {
        let next = g.get() + 1;
        g.set(next);
        next
    })
}

#[inline]
fn current_generation() -> u64 {
    GENERATION.with(|g| g.get())
}

/// Release the active mount (if any) outside of the thread-local borrow.
fn take_and_release(filter: impl Fn(u64) -> bool) {
    let taken = ACTIVE.with(|a| {
        let mut slot = a.borrow_mut();
        match slot.as_ref() {
            Some((id, _)) if filter(*id) => slot.take(),
            _ => None,
        }
    });
    if let Some((_, mut mount)) = taken {
        mount.release();
    }
}

/// Build and start the effect inside `#container_id`. Returns the mount id, or
/// `None` when a newer activation/deactivation superseded this one while the GPU
/// was initializing.
pub async fn activate(container_id: &str, params: HeartParams) -> anyhow::Result<Option<u64>> {
    params.validate()?;
    take_and_release(|_| true);
    let generation = bump_generation();

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::container_element(&document, container_id)?;

    let attached = AttachedCanvas::attach(&document, &container)?;
    let canvas_el = attached.element().clone();
    let mut canvas = Owned::new(attached);
    let vp = dom::sync_canvas_backing_size(&canvas_el, params.max_pixel_ratio);
    let mut resize = Owned::new(ResizeListener::install(&canvas_el, params.max_pixel_ratio)?);

    let sprite = glow_sprite(params.sprite_size_px, params.color_rgb);
    let targets = sample_targets(params.particle_count, &params, &mut rand::thread_rng());
    let mut field = Owned::new(ParticleField::create(targets, params.color_rgb, sprite)?);
    let mut gpu = {
        let f = field
            .get()
            .ok_or_else(|| anyhow::anyhow!("field released during activation"))?;
        Owned::new(GpuState::new(canvas_el.clone(), f, &params).await?)
    };

    if current_generation() != generation {
        log::info!("[mount] activation superseded during GPU init; releasing");
        resize.release();
        canvas.release();
        gpu.release();
        field.release();
        return Ok(None);
    }

    let (Some(field), Some(gpu)) = (field.into_inner(), gpu.into_inner()) else {
        return Err(anyhow::anyhow!("resources released during activation"));
    };
    let scene = Rc::new(RefCell::new(Scene::new(canvas_el, field, gpu)));
    let liveness = Liveness::new();
    let driver = Rc::new(RefCell::new(AnimationDriver::new(&params, liveness.clone())));
    start_loop(Rc::new(RafScheduler::new(window)), driver, scene.clone());
    log::info!(
        "[mount] celebration active: {} particles, viewport {:?}",
        params.particle_count,
        vp.pixel_size()
    );

    let mount: Mount = Mounted::new(liveness, resize, canvas, scene);
    ACTIVE.with(|a| *a.borrow_mut() = Some((generation, Owned::new(mount))));
    Ok(Some(generation))
}

/// Deactivate the mount with `id` if it is still the active one. Idempotent.
pub fn deactivate(id: u64) {
    take_and_release(|active| active == id);
}

/// Deactivate whatever is active and cancel any activation still in flight.
pub fn deactivate_all() {
    bump_generation();
    take_and_release(|_| true);
}

pub fn is_active(id: u64) -> bool {
    ACTIVE.with(|a| matches!(a.borrow().as_ref(), Some((active, _)) if *active == id))
}
