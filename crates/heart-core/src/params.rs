use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("build duration must be positive and finite, got {0}")]
    BuildDuration(f32),
    #[error("pixel ratio cap must be >= 1.0, got {0}")]
    PixelRatioCap(f64),
    #[error("sprite size must be in 1..={max}, got {0}", max = MAX_SPRITE_SIZE_PX)]
    SpriteSize(u32),
    #[error("{name} must be finite and non-negative, got {value}")]
    Amplitude { name: &'static str, value: f32 },
}

/// Runtime configuration for one heart field.
#[derive(Clone, Debug)]
pub struct HeartParams {
    pub particle_count: usize,
    pub spread_jitter: f32,
    pub depth_jitter: f32,
    pub color_rgb: [f32; 3],
    pub build_duration_sec: f32,
    pub sway_amplitude: f32,
    pub pulse_amplitude: f32,
    pub sprite_size_px: u32,
    pub point_size: f32,
    pub max_pixel_ratio: f64,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            spread_jitter: SPREAD_JITTER,
            depth_jitter: DEPTH_JITTER,
            color_rgb: HEART_COLOR,
            build_duration_sec: BUILD_DURATION_SEC,
            sway_amplitude: SWAY_AMPLITUDE,
            pulse_amplitude: PULSE_AMPLITUDE,
            sprite_size_px: SPRITE_SIZE_PX,
            point_size: POINT_SIZE,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

impl HeartParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.build_duration_sec.is_finite() && self.build_duration_sec > 0.0) {
            return Err(ParamsError::BuildDuration(self.build_duration_sec));
        }
        if !(self.max_pixel_ratio.is_finite() && self.max_pixel_ratio >= 1.0) {
            return Err(ParamsError::PixelRatioCap(self.max_pixel_ratio));
        }
        if !(1..=MAX_SPRITE_SIZE_PX).contains(&self.sprite_size_px) {
            return Err(ParamsError::SpriteSize(self.sprite_size_px));
        }
        let amplitudes = [
            ("spread_jitter", self.spread_jitter),
            ("depth_jitter", self.depth_jitter),
            ("sway_amplitude", self.sway_amplitude),
            ("pulse_amplitude", self.pulse_amplitude),
            ("point_size", self.point_size),
        ];
        for (name, value) in amplitudes {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParamsError::Amplitude { name, value });
            }
        }
        Ok(())
    }
}
