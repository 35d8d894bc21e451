use super::helpers;
use crate::constants::{INSTANCE_STRIDE, QUAD_VERTICES};
use heart_core::ParticleField;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) point_size: f32,
    pub(crate) _pad: [f32; 3],
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

/// Geometry (instance buffers), material (pipeline + sprite) and uniforms for the field.
pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) uniform_bg: wgpu::BindGroup,
    pub(crate) sprite_tex: wgpu::Texture,
    pub(crate) sprite_bg: wgpu::BindGroup,
    pub(crate) position_buffer: wgpu::Buffer,
    pub(crate) color_buffer: wgpu::Buffer,
    pub(crate) count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    color_format: wgpu::TextureFormat,
    field: &ParticleField,
) -> anyhow::Result<ParticleResources> {
    let sprite = field
        .sprite()
        .ok_or_else(|| anyhow::anyhow!("field has no sprite (disposed?)"))?;
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(heart_core::PARTICLES_WGSL.into()),
    });
    let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl0"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let sprite_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl1"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&uniform_bgl, &sprite_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particles_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_particle"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: INSTANCE_STRIDE,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &POSITION_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: INSTANCE_STRIDE,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &COLOR_ATTRS,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        // No depth attachment: nothing writes depth, the glow never self-occludes.
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_particle"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(helpers::additive_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particles_uniforms"),
        size: std::mem::size_of::<ParticleUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg0"),
        layout: &uniform_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let (sprite_tex, sprite_view) = helpers::create_sprite_texture(device, queue, sprite);
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("sprite_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let sprite_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg1"),
        layout: &sprite_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&sprite_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });

    let count = field.len();
    let position_buffer =
        helpers::create_instance_buffer(device, "particle_positions", count, INSTANCE_STRIDE);
    let color_buffer = helpers::create_instance_buffer(device, "particle_colors", count, INSTANCE_STRIDE);
    if count > 0 {
        queue.write_buffer(&position_buffer, 0, bytemuck::cast_slice(field.positions()));
        queue.write_buffer(&color_buffer, 0, bytemuck::cast_slice(field.colors()));
    }

    Ok(ParticleResources {
        pipeline,
        uniform_buffer,
        uniform_bg,
        sprite_tex,
        sprite_bg,
        position_buffer,
        color_buffer,
        count: count as u32,
    })
}

impl ParticleResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniform_bg, &[]);
        rpass.set_bind_group(1, &self.sprite_bg, &[]);
        rpass.set_vertex_buffer(0, self.position_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.color_buffer.slice(..));
        rpass.draw(0..QUAD_VERTICES, 0..self.count);
    }

    pub(crate) fn destroy(&self) {
        self.position_buffer.destroy();
        self.color_buffer.destroy();
        self.uniform_buffer.destroy();
        self.sprite_tex.destroy();
    }
}
