use crate::constants::{MAX_SPRITE_SIZE_PX, SPRITE_CORE_PX};

/// Square RGBA8 image used as the glow sprite for every particle.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteImage {
    pub size: u32,
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.rgba[(y as usize * self.size as usize + x as usize) * 4 + 3]
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.size * 4
    }
}

/// Build a soft circular sprite: one hue, fully opaque within a small core at the
/// center and fading smoothly to fully transparent at the edge of the inscribed
/// circle. `size` is clamped to `1..=MAX_SPRITE_SIZE_PX`.
pub fn glow_sprite(size: u32, rgb: [f32; 3]) -> SpriteImage {
    let size = size.clamp(1, MAX_SPRITE_SIZE_PX);
    let [r, g, b] = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    let center = size as f32 * 0.5;
    let radius = center;
    let span = (radius - SPRITE_CORE_PX).max(f32::EPSILON);
    let mut rgba = Vec::with_capacity(size as usize * size as usize * 4);
    for y in 0..size {
        for x in 0..size {
            // sample at pixel centers
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            let d = ((dist - SPRITE_CORE_PX).max(0.0) / span).min(1.0);
            let a = 1.0 - smoothstep(d);
            rgba.extend_from_slice(&[r, g, b, (a * 255.0).round() as u8]);
        }
    }
    SpriteImage { size, rgba }
}

#[inline]
fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}
