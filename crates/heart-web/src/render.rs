use crate::constants::{CLEAR_COLOR, MAX_FRAME_LATENCY};
use heart_core::{Camera, FieldTransform, HeartParams, ParticleField, Release};
use web_sys as web;

mod helpers;
mod particles;
use particles::{create_particle_resources, ParticleResources, ParticleUniforms};

pub struct GpuState {
    // Dropped first on release so the canvas stops presenting before buffers go away.
    surface: Option<wgpu::Surface<'static>>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    camera: Camera,
    point_size: f32,
}

impl GpuState {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        field: &ParticleField,
        params: &HeartParams,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Prefer premultiplied alpha so the transparent clear shows the page behind.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: MAX_FRAME_LATENCY,
        };
        if width > 0 && height > 0 {
            surface.configure(&device, &config);
        }

        let particles = create_particle_resources(&device, &queue, format, field)?;
        let mut camera = Camera::default();
        camera.set_surface_size(width, height);
        log::info!(
            "[gpu] ready: {} particles, {}x{} {:?}",
            particles.count,
            width,
            height,
            format
        );

        Ok(Self {
            surface: Some(surface),
            device,
            queue,
            config,
            particles,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
            camera,
            point_size: params.point_size,
        })
    }

    /// Track the canvas backing size. A zero-sized canvas leaves the surface
    /// unconfigured and frames skip drawing until it grows again.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.camera.set_surface_size(width, height);
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        if let Some(surface) = &self.surface {
            surface.configure(&self.device, &self.config);
        }
        log::debug!("[gpu] resized to {}x{}", width, height);
    }

    /// Upload dirty positions, write uniforms and submit one frame.
    pub fn render(
        &mut self,
        field: &mut ParticleField,
        transform: FieldTransform,
    ) -> Result<(), wgpu::SurfaceError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let Some(surface) = &self.surface else {
            return Ok(());
        };
        if field.take_dirty() && !field.is_empty() {
            self.queue.write_buffer(
                &self.particles.position_buffer,
                0,
                bytemuck::cast_slice(field.positions()),
            );
        }
        let uniforms = ParticleUniforms {
            view: self.camera.view_matrix().to_cols_array_2d(),
            proj: self.camera.projection_matrix().to_cols_array_2d(),
            model: transform.matrix().to_cols_array_2d(),
            point_size: self.point_size,
            _pad: [0.0; 3],
        };
        self.queue.write_buffer(
            &self.particles.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

        let frame = surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigure after the surface reported `Lost`/`Outdated`.
    pub fn reconfigure(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        if let Some(surface) = &self.surface {
            surface.configure(&self.device, &self.config);
        }
    }
}

impl Release for GpuState {
    fn release(&mut self) {
        // surface -> geometry/material/sprite
        self.surface = None;
        self.particles.destroy();
        log::debug!("[gpu] released");
    }
}
