use crate::core::{
    Camera, CAMERA_ZFAR, CAMERA_ZNEAR, ExperienceSettings, FLAME_ANCHOR_Y, FLAME_SCALE,
    PAD_COLOR, ROCKET_COLOR, SKY_HORIZON_COLOR, SKY_TOP_COLOR, SMOKE_EMITTER, SPACE_CLEAR_COLOR,
};
use crate::frame::FrameInputs;
use glam::{Mat4, Vec3};
use web_sys as web;

mod flame;
mod helpers;
mod mesh;
mod sky;
mod sprites;

use flame::{create_flame_resources, FlameGpuUniforms, FlameResources};
use mesh::{create_mesh_resources, MeshNode, MeshResources, MeshUniforms};
use sky::{create_sky_resources, SkyResources, SkyUniforms};
use sprites::{create_sprite_resources, SpriteBatch, SpriteInstance, SpriteResources, SpriteUniforms};

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth_view: wgpu::TextureView,
    sky: SkyResources,
    meshes: MeshResources,
    flame: FlameResources,
    sprites: SpriteResources,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        settings: &ExperienceSettings,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = helpers::create_depth_view(&device, width, height);
        let sky = create_sky_resources(&device, format);
        let meshes = create_mesh_resources(&device, format);
        let flame = create_flame_resources(&device, format);
        let sprites = create_sprite_resources(&device, format, settings);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            sky,
            meshes,
            flame,
            sprites,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = helpers::create_depth_view(&self.device, width, height);
        }
    }

    fn write_mesh_uniforms(&self, node: &MeshNode, view_proj: Mat4, model: Mat4, color: [f32; 4]) {
        self.queue.write_buffer(
            &node.uniform_buffer,
            0,
            bytemuck::bytes_of(&MeshUniforms {
                mvp: (view_proj * model).to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                color,
            }),
        );
    }

    fn write_sprite_uniforms(
        &self,
        batch: &SpriteBatch,
        view_proj: Mat4,
        model: Mat4,
        cam_right: Vec3,
        cam_up: Vec3,
    ) {
        self.queue.write_buffer(
            &batch.uniform_buffer,
            0,
            bytemuck::bytes_of(&SpriteUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                cam_right: [cam_right.x, cam_right.y, cam_right.z, 0.0],
                cam_up: [cam_up.x, cam_up.y, cam_up.z, 0.0],
            }),
        );
    }

    pub fn render(&mut self, inputs: &FrameInputs) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let rig = inputs.pose.camera;
        let camera = Camera {
            eye: rig.eye,
            target: rig.target,
            up: Vec3::Y,
            aspect: self.width as f32 / self.height.max(1) as f32,
            fovy_radians: rig.fovy_radians,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        };
        let view_proj = camera.projection_matrix() * camera.view_matrix();

        // Camera basis for billboarded sprites
        let forward = (rig.target - rig.eye).normalize();
        let cam_right = forward.cross(Vec3::Y).normalize();
        let cam_up = cam_right.cross(forward);

        // Sky fades out as the rocket climbs
        self.queue.write_buffer(
            &self.sky.uniform_buffer,
            0,
            bytemuck::bytes_of(&SkyUniforms {
                top_color: [SKY_TOP_COLOR[0], SKY_TOP_COLOR[1], SKY_TOP_COLOR[2], 1.0],
                horizon_color: [
                    SKY_HORIZON_COLOR[0],
                    SKY_HORIZON_COLOR[1],
                    SKY_HORIZON_COLOR[2],
                    1.0,
                ],
                params: [inputs.sky_opacity.clamp(0.0, 1.0), 0.0, 0.0, 0.0],
            }),
        );

        // Object transforms come in by value from the mapper
        let rocket_model = Mat4::from_translation(Vec3::new(0.0, inputs.pose.rocket.y, 0.0))
            * Mat4::from_rotation_x(inputs.pose.rocket.rot_x)
            * Mat4::from_rotation_z(inputs.pose.rocket.rot_z);
        let pad_model = Mat4::from_translation(Vec3::new(0.0, inputs.pose.pad.y, 0.0));
        // The flame hangs under the nozzle, flipped so its hot base meets the
        // rocket and the red tips trail downward.
        let flame_model = rocket_model
            * Mat4::from_translation(Vec3::new(0.0, FLAME_ANCHOR_Y, 0.0))
            * Mat4::from_scale(Vec3::new(FLAME_SCALE, -FLAME_SCALE, FLAME_SCALE));

        self.write_mesh_uniforms(&self.meshes.rocket, view_proj, rocket_model, ROCKET_COLOR);
        self.write_mesh_uniforms(&self.meshes.pad, view_proj, pad_model, PAD_COLOR);

        self.queue.write_buffer(
            &self.flame.uniform_buffer,
            0,
            bytemuck::bytes_of(&FlameGpuUniforms {
                mvp: (view_proj * flame_model).to_cols_array_2d(),
                model: flame_model.to_cols_array_2d(),
                params: [
                    inputs.flame.time,
                    inputs.flame.intensity,
                    inputs.flame.speed,
                    inputs.flame.noise_scale,
                ],
            }),
        );

        let star_model =
            Mat4::from_rotation_y(inputs.star_rot[1]) * Mat4::from_rotation_x(inputs.star_rot[0]);
        self.write_sprite_uniforms(&self.sprites.stars, view_proj, star_model, cam_right, cam_up);
        self.write_sprite_uniforms(
            &self.sprites.smoke,
            view_proj,
            Mat4::IDENTITY,
            cam_right,
            cam_up,
        );

        // Smoke instance data is rebuilt every frame from particle visuals
        let smoke_instances: Vec<SpriteInstance> = inputs
            .smoke
            .iter()
            .take(self.sprites.smoke.capacity as usize)
            .map(|p| SpriteInstance {
                pos: (SMOKE_EMITTER + p.position).to_array(),
                scale: p.scale,
                color: [1.0, 1.0, 1.0, p.opacity],
            })
            .collect();
        self.sprites.smoke.instance_count = smoke_instances.len() as u32;
        if !smoke_instances.is_empty() {
            self.queue.write_buffer(
                &self.sprites.smoke.instance_buffer,
                0,
                bytemuck::cast_slice(&smoke_instances),
            );
        }

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: SPACE_CLEAR_COLOR[0],
                        g: SPACE_CLEAR_COLOR[1],
                        b: SPACE_CLEAR_COLOR[2],
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        // Sky first (no depth write), then opaque meshes, then the additive
        // flame, then alpha-blended sprites.
        rpass.set_pipeline(&self.sky.pipeline);
        rpass.set_bind_group(0, &self.sky.bind_group, &[]);
        rpass.draw(0..3, 0..1);

        rpass.set_pipeline(&self.meshes.pipeline);
        for node in [&self.meshes.rocket, &self.meshes.pad] {
            rpass.set_bind_group(0, &node.bind_group, &[]);
            rpass.set_vertex_buffer(0, node.mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(node.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..node.mesh.index_count, 0, 0..1);
        }

        rpass.set_pipeline(&self.flame.pipeline);
        rpass.set_bind_group(0, &self.flame.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.flame.mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(
            self.flame.mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        rpass.draw_indexed(0..self.flame.mesh.index_count, 0, 0..1);

        rpass.set_pipeline(&self.sprites.pipeline);
        rpass.set_vertex_buffer(0, self.sprites.quad_vb.slice(..));
        for batch in [&self.sprites.stars, &self.sprites.smoke] {
            if batch.instance_count == 0 {
                continue;
            }
            rpass.set_bind_group(0, &batch.bind_group, &[]);
            rpass.set_vertex_buffer(1, batch.instance_buffer.slice(..));
            rpass.draw(0..6, 0..batch.instance_count);
        }
        drop(rpass);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
