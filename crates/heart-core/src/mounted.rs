//! Ordered teardown of one mounted effect.

use crate::driver::Liveness;
use crate::resources::{Owned, Release};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a live effect holds outside its frame loop.
///
/// Release order is fixed: frames stop (liveness killed), the resize listener
/// is removed, the canvas is detached, then the scene's GPU and CPU resources
/// are disposed. The scene is shared with the frame loop, which only touches
/// it while the liveness flag is up.
pub struct Mounted<L: Release, C: Release, S: Release> {
    liveness: Liveness,
    listener: Owned<L>,
    canvas: Owned<C>,
    scene: Rc<RefCell<S>>,
}

impl<L: Release, C: Release, S: Release> Mounted<L, C, S> {
    pub fn new(liveness: Liveness, listener: Owned<L>, canvas: Owned<C>, scene: Rc<RefCell<S>>) -> Self {
        Self {
            liveness,
            listener,
            canvas,
            scene,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.liveness.is_alive()
    }
}

impl<L: Release, C: Release, S: Release> Release for Mounted<L, C, S> {
    fn release(&mut self) {
        self.liveness.kill();
        self.listener.release();
        self.canvas.release();
        match self.scene.try_borrow_mut() {
            Ok(mut scene) => scene.release(),
            Err(_) => log::error!("[mount] scene busy during teardown"),
        }
        log::info!("[mount] torn down");
    }
}
