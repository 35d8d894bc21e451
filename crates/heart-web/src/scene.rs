use crate::render::GpuState;
use heart_core::{FieldTransform, FrameTarget, Owned, ParticleField, Release};
use web_sys as web;

/// Everything one frame touches: CPU field, GPU state and the canvas whose
/// backing size drives surface reconfiguration.
pub struct Scene {
    canvas: web::HtmlCanvasElement,
    field: Owned<ParticleField>,
    gpu: Owned<GpuState>,
    transform: FieldTransform,
}

impl Scene {
    pub fn new(canvas: web::HtmlCanvasElement, field: ParticleField, gpu: GpuState) -> Self {
        Self {
            canvas,
            field: Owned::new(field),
            gpu: Owned::new(gpu),
            transform: FieldTransform::IDENTITY,
        }
    }
}

impl FrameTarget for Scene {
    fn set_current_positions(&mut self, progress: f32) {
        if let Some(field) = self.field.get_mut() {
            if let Err(e) = field.set_current_positions(progress) {
                log::warn!("[scene] position update skipped: {}", e);
            }
        }
    }

    fn set_transform(&mut self, transform: FieldTransform) {
        self.transform = transform;
    }

    fn render(&mut self) {
        let (Some(field), Some(gpu)) = (self.field.get_mut(), self.gpu.get_mut()) else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(field, self.transform) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

impl Release for Scene {
    fn release(&mut self) {
        self.gpu.release();
        self.field.release();
    }
}
