//! CPU-side particle buffers for the heart morph.
//!
//! All per-particle data lives in flat `Vec<f32>` buffers indexed by
//! `particle * 3 + axis`. The buffers are allocated once at creation and mutated
//! in place during the build phase; the renderer re-uploads positions whenever
//! [`ParticleField::take_dirty`] reports a change.

use crate::sprite::SpriteImage;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("particle field has been disposed")]
    Disposed,
    #[error("target buffer length {0} is not a multiple of 3")]
    RaggedBuffer(usize),
}

pub struct ParticleField {
    count: usize,
    targets: Vec<f32>,
    positions: Vec<f32>,
    colors: Vec<f32>,
    sprite: Option<SpriteImage>,
    dirty: bool,
    disposed: bool,
}

impl ParticleField {
    /// Allocate buffers for `targets.len() / 3` particles with every current
    /// position at the origin.
    pub fn create(
        targets: Vec<f32>,
        color_rgb: [f32; 3],
        sprite: SpriteImage,
    ) -> Result<Self, FieldError> {
        if targets.len() % 3 != 0 {
            return Err(FieldError::RaggedBuffer(targets.len()));
        }
        let count = targets.len() / 3;
        let colors = color_rgb.iter().copied().cycle().take(count * 3).collect();
        Ok(Self {
            count,
            positions: vec![0.0; targets.len()],
            targets,
            colors,
            sprite: Some(sprite),
            dirty: true,
            disposed: false,
        })
    }

    /// Set every `current = target * progress`, with `progress` clamped to [0, 1].
    pub fn set_current_positions(&mut self, progress: f32) -> Result<(), FieldError> {
        if self.disposed {
            return Err(FieldError::Disposed);
        }
        let k = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        for (cur, tgt) in self.positions.iter_mut().zip(&self.targets) {
            *cur = tgt * k;
        }
        self.dirty = true;
        Ok(())
    }

    /// Returns whether positions changed since the last call, clearing the flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Release buffers and the retained sprite. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.dirty = false;
        self.targets = Vec::new();
        self.positions = Vec::new();
        self.colors = Vec::new();
        self.sprite = None;
        log::debug!("[field] disposed {} particles", self.count);
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Particle count fixed at creation (unchanged by disposal).
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    #[inline]
    pub fn sprite(&self) -> Option<&SpriteImage> {
        self.sprite.as_ref()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Option<[f32; 3]> {
        self.positions.get(i * 3..i * 3 + 3).map(|p| [p[0], p[1], p[2]])
    }

    #[inline]
    pub fn target(&self, i: usize) -> Option<[f32; 3]> {
        self.targets.get(i * 3..i * 3 + 3).map(|p| [p[0], p[1], p[2]])
    }
}
