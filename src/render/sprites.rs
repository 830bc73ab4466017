use super::helpers;
use crate::core::{generate_stars, ExperienceSettings, STAR_COUNT, STAR_OPACITY, STAR_SPRITE_SCALE};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) cam_right: [f32; 4],
    pub(crate) cam_up: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteInstance {
    pub(crate) pos: [f32; 3],
    pub(crate) scale: f32,
    pub(crate) color: [f32; 4],
}

/// One instanced draw: its own uniforms (the model matrix differs between
/// the star shell and the smoke emitter) and instance buffer.
pub(crate) struct SpriteBatch {
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_count: u32,
    pub(crate) capacity: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct SpriteResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) quad_vb: wgpu::Buffer,
    pub(crate) stars: SpriteBatch,
    pub(crate) smoke: SpriteBatch,
}

fn make_batch(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    label: &str,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    capacity: u32,
) -> SpriteBatch {
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        label,
        std::mem::size_of::<SpriteUniforms>() as u64,
    );
    let bind_group = helpers::uniform_bind_group(device, label, bgl, &uniform_buffer);
    SpriteBatch {
        instance_buffer,
        instance_count,
        capacity,
        uniform_buffer,
        bind_group,
    }
}

pub(crate) fn create_sprite_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    settings: &ExperienceSettings,
) -> SpriteResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sprites_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SPRITES_WGSL.into()),
    });
    let bgl = helpers::uniform_bgl(device, "sprites_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("sprites_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let vertex_buffers = [
        // slot 0: quad corners
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
            ],
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("sprites_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_state(false, wgpu::CompareFunction::Less)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    // Quad vertex buffer (two triangles)
    let quad_vertices: [f32; 12] = [
        -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
    ];
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sprite_quad_vb"),
        contents: bytemuck::cast_slice(&quad_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    // Star shell instances are static for the whole session
    let star_instances: Vec<SpriteInstance> = generate_stars(STAR_COUNT, settings.seed)
        .iter()
        .map(|s| SpriteInstance {
            pos: s.position.to_array(),
            scale: STAR_SPRITE_SCALE,
            color: [s.color.x, s.color.y, s.color.z, STAR_OPACITY],
        })
        .collect();
    let stars_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_instances"),
        contents: bytemuck::cast_slice(&star_instances),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let stars = make_batch(
        device,
        &bgl,
        "stars",
        stars_buffer,
        star_instances.len() as u32,
        star_instances.len() as u32,
    );

    // Smoke instances are rewritten every frame
    let smoke_capacity = settings.particle_count.max(1) as u32;
    let smoke_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("smoke_instances"),
        size: u64::from(smoke_capacity) * std::mem::size_of::<SpriteInstance>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let smoke = make_batch(device, &bgl, "smoke", smoke_buffer, 0, smoke_capacity);

    SpriteResources {
        pipeline,
        quad_vb,
        stars,
        smoke,
    }
}
