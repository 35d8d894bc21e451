/// Render-surface dimensions as seen by the viewport binding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Build from CSS size and the raw device pixel ratio, capping the ratio at
    /// `max_pixel_ratio` to bound GPU cost on high-density displays.
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            pixel_ratio: dpr.min(max_pixel_ratio.max(1.0)),
        }
    }

    /// Backing-store size in device pixels.
    #[inline]
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.css_width * self.pixel_ratio) as u32,
            (self.css_height * self.pixel_ratio) as u32,
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        let (w, h) = self.pixel_size();
        w == 0 || h == 0
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        let (w, h) = self.pixel_size();
        aspect_of(w, h)
    }
}

/// Width / height, falling back to 1.0 for a degenerate surface.
#[inline]
pub fn aspect_of(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
