//! Build/idle animation driver.
//!
//! The driver is fed wall-clock timestamps (seconds) by a [`crate::FrameScheduler`]
//! and pushes its per-frame decisions into a [`FrameTarget`]. During the build
//! phase it rewrites particle positions; in the idle phase it only updates a
//! rigid whole-field transform.

use crate::constants::{PULSE_FREQUENCY, SWAY_FREQUENCY};
use crate::params::HeartParams;
use glam::{Mat4, Vec3};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Building,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub phase: Phase,
    pub start_time: Option<f64>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            phase: Phase::Building,
            start_time: None,
        }
    }
}

/// Rigid transform applied to the whole field (rotation about Y, then uniform scale).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldTransform {
    pub rotation_y: f32,
    pub scale: f32,
}

impl FieldTransform {
    pub const IDENTITY: Self = Self {
        rotation_y: 0.0,
        scale: 1.0,
    };

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale)) * Mat4::from_rotation_y(self.rotation_y)
    }
}

impl Default for FieldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Receiver of the driver's per-frame work.
pub trait FrameTarget {
    /// Called only during the build phase (and once on the transition frame with 1.0).
    fn set_current_positions(&mut self, progress: f32);
    fn set_transform(&mut self, transform: FieldTransform);
    /// Exactly one call per live frame.
    fn render(&mut self);
}

/// Shared flag checked at the top of every frame; once killed it stays dead.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    #[inline]
    pub fn kill(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stopped,
}

/// Quartic ease-out: fast start, gentle settle.
#[inline]
pub fn ease_out_quart(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Idle-phase transform at `elapsed` seconds since the field started building.
#[inline]
pub fn idle_transform(elapsed: f32, sway_amplitude: f32, pulse_amplitude: f32) -> FieldTransform {
    FieldTransform {
        rotation_y: sway_amplitude * (elapsed * SWAY_FREQUENCY).sin(),
        scale: 1.0 + pulse_amplitude * (elapsed * PULSE_FREQUENCY).sin(),
    }
}

pub struct AnimationDriver {
    state: AnimationState,
    build_duration: f32,
    sway_amplitude: f32,
    pulse_amplitude: f32,
    last_ease: f32,
    liveness: Liveness,
}

impl AnimationDriver {
    pub fn new(params: &HeartParams, liveness: Liveness) -> Self {
        Self {
            state: AnimationState::default(),
            build_duration: params.build_duration_sec.max(f32::EPSILON),
            sway_amplitude: params.sway_amplitude,
            pulse_amplitude: params.pulse_amplitude,
            last_ease: 0.0,
            liveness,
        }
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    /// Run one frame at host time `now_sec`.
    pub fn frame<T: FrameTarget + ?Sized>(&mut self, now_sec: f64, target: &mut T) -> FrameOutcome {
        if !self.liveness.is_alive() {
            return FrameOutcome::Stopped;
        }
        let start = *self.state.start_time.get_or_insert(now_sec);
        let elapsed = ((now_sec - start) as f32).max(0.0);

        match self.state.phase {
            Phase::Building if elapsed < self.build_duration => {
                let ease = ease_out_quart(elapsed / self.build_duration).max(self.last_ease);
                self.last_ease = ease;
                target.set_current_positions(ease);
                target.set_transform(FieldTransform::IDENTITY);
            }
            Phase::Building => {
                // Snap to the exact targets, then never touch positions again.
                self.last_ease = 1.0;
                target.set_current_positions(1.0);
                self.state.phase = Phase::Idle;
                log::debug!("[driver] build complete after {:.3}s; idle", elapsed);
                target.set_transform(self.idle(elapsed));
            }
            Phase::Idle => target.set_transform(self.idle(elapsed)),
        }
        target.render();
        FrameOutcome::Continue
    }

    #[inline]
    fn idle(&self, elapsed: f32) -> FieldTransform {
        idle_transform(elapsed, self.sway_amplitude, self.pulse_amplitude)
    }
}
