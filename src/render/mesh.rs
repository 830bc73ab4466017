use super::helpers::{self, GpuMesh};
use crate::core::geometry::{pad_mesh, rocket_mesh};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

pub(crate) struct MeshNode {
    pub(crate) mesh: GpuMesh,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct MeshResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) rocket: MeshNode,
    pub(crate) pad: MeshNode,
}

fn make_node(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    label: &str,
    mesh: GpuMesh,
) -> MeshNode {
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        label,
        std::mem::size_of::<MeshUniforms>() as u64,
    );
    let bind_group = helpers::uniform_bind_group(device, label, bgl, &uniform_buffer);
    MeshNode {
        mesh,
        uniform_buffer,
        bind_group,
    }
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
    });
    let bgl = helpers::uniform_bgl(device, "mesh_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("mesh_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[helpers::mesh_vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_state(true, wgpu::CompareFunction::Less)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let rocket = make_node(
        device,
        &bgl,
        "rocket",
        helpers::upload_mesh(device, "rocket_mesh", &rocket_mesh()),
    );
    let pad = make_node(
        device,
        &bgl,
        "pad",
        helpers::upload_mesh(device, "pad_mesh", &pad_mesh()),
    );
    MeshResources {
        pipeline,
        rocket,
        pad,
    }
}
