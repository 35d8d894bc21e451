use crate::driver::{AnimationDriver, FrameOutcome, FrameTarget};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One-shot frame callback receiving the host timestamp in seconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Host "next frame" primitive (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Scheduler driven by hand with synthetic timestamps.
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Fire every callback queued before this call at time `now_sec`.
    /// Returns how many callbacks ran.
    pub fn tick(&self, now_sec: f64) -> usize {
        let due: Vec<FrameCallback> = self.pending.borrow_mut().drain(..).collect();
        let n = due.len();
        for cb in due {
            cb(now_sec);
        }
        n
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}

/// Start the per-frame loop: every frame runs the driver against the target and
/// requests the next frame until the driver reports [`FrameOutcome::Stopped`].
pub fn start_loop<S, T>(
    scheduler: Rc<S>,
    driver: Rc<RefCell<AnimationDriver>>,
    target: Rc<RefCell<T>>,
) where
    S: FrameScheduler + 'static,
    T: FrameTarget + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |now_sec| {
        let outcome = driver.borrow_mut().frame(now_sec, &mut *target.borrow_mut());
        if outcome == FrameOutcome::Continue {
            start_loop(next, driver, target);
        }
    }));
}
