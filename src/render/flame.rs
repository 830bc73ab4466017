use super::helpers::{self, GpuMesh};
use crate::core::flame::build_flame_mesh;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FlameGpuUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    // x: time, y: intensity, z: speed, w: noise scale
    pub(crate) params: [f32; 4],
}

pub(crate) struct FlameResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) mesh: GpuMesh,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_flame_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
) -> FlameResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("flame_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::FLAME_WGSL.into()),
    });
    let bgl = helpers::uniform_bgl(device, "flame_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("flame_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Additive, double-sided, depth-tested but not depth-written
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("flame_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[helpers::mesh_vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(false, wgpu::CompareFunction::Less)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState {
                    color: wgpu::BlendComponent {
                        src_factor: wgpu::BlendFactor::SrcAlpha,
                        dst_factor: wgpu::BlendFactor::One,
                        operation: wgpu::BlendOperation::Add,
                    },
                    alpha: wgpu::BlendComponent {
                        src_factor: wgpu::BlendFactor::One,
                        dst_factor: wgpu::BlendFactor::One,
                        operation: wgpu::BlendOperation::Add,
                    },
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let mesh = helpers::upload_mesh(device, "flame_mesh", &build_flame_mesh());
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        "flame_uniforms",
        std::mem::size_of::<FlameGpuUniforms>() as u64,
    );
    let bind_group = helpers::uniform_bind_group(device, "flame_bg", &bgl, &uniform_buffer);
    FlameResources {
        pipeline,
        mesh,
        uniform_buffer,
        bind_group,
    }
}
