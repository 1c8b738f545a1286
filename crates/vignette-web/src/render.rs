use crate::constants::CLEAR_COLOR;
use glam::Vec3;
use vignette_core::Camera;
use web_sys as web;

mod post;
mod sprites;
mod targets;

use targets::RenderTargets;

pub use sprites::{sprite_instances, SpriteInstance};
use sprites::{create_sprite_resources, SceneUniforms, SpriteResources};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    bloom_radius: f32,
    bloom_strength: f32,
    blur_dir: [f32; 2],
    threshold: f32,
    _pad: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Instanced sprite pass for the scene entities
    sprites: SpriteResources,
    // Post-processing resources
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,

    post: post::PostResources,
    // Bind groups for different sources
    bg_hdr: wgpu::BindGroup,
    bg_from_bloom_a: wgpu::BindGroup,
    bg_from_bloom_b: wgpu::BindGroup,
    bg_bloom_a_only: wgpu::BindGroup, // group1 for composite, sampling bloom A

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    view_proj: glam::Mat4,
    cam_right: Vec3,
    cam_up: Vec3,
    bloom_radius: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    // Default limits keep older WebGPU implementations happy
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

        // Offscreen HDR scene target plus half-resolution bloom ping-pong
        let hdr_format = wgpu::TextureFormat::Rgba16Float;
        let targets = RenderTargets::create(&device, width, height);

        let sprites = create_sprite_resources(&device, hdr_format);

        // Post shader + pipelines
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/post.wgsl").into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, hdr_format, format);
        let (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only) =
            post::build_bind_groups(&device, &post, &linear_sampler, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprites,
            targets,
            linear_sampler,
            post,
            bg_hdr,
            bg_from_bloom_a,
            bg_from_bloom_b,
            bg_bloom_a_only,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            view_proj: glam::Mat4::IDENTITY,
            cam_right: Vec3::X,
            cam_up: Vec3::Y,
            bloom_radius: 0.0,
        })
    }

    /// Cache view-projection and the camera basis used for billboarding.
    pub fn set_camera(&mut self, camera: &Camera) {
        self.view_proj = camera.projection_matrix() * camera.view_matrix();
        let forward = (camera.target - camera.eye).normalize();
        self.cam_right = forward.cross(camera.up).normalize();
        self.cam_up = self.cam_right.cross(forward);
    }

    /// Bloom radius for this frame, as produced by the pulsation driver.
    pub fn set_bloom_radius(&mut self, radius: f32) {
        self.bloom_radius = radius.max(0.0);
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

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            let (bg_hdr, bg_from_a, bg_from_b, bg_a_only) = post::build_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets,
            );
            self.bg_hdr = bg_hdr;
            self.bg_from_bloom_a = bg_from_a;
            self.bg_from_bloom_b = bg_from_b;
            self.bg_bloom_a_only = bg_a_only;
        }
    }

    pub fn render(&mut self, instances: &[SpriteInstance]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: entities into the HDR target
        {
            let u = SceneUniforms {
                view_proj: self.view_proj.to_cols_array_2d(),
                cam_right: self.cam_right.extend(0.0).to_array(),
                cam_up: self.cam_up.extend(0.0).to_array(),
            };
            self.queue
                .write_buffer(&self.sprites.uniform_buffer, 0, bytemuck::bytes_of(&u));
            let count = self.sprites.write_instances(&self.queue, instances);

            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
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
            rpass.set_pipeline(&self.sprites.pipeline);
            rpass.set_bind_group(0, &self.sprites.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sprites.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.sprites.instance_vb.slice(..));
            rpass.draw(0..6, 0..count);
        }

        let res = [self.width as f32 / 2.0, self.height as f32 / 2.0];

        // Pass 2: bright pass -> bloom_a
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.bloom_radius,
            [0.0, 0.0],
        );
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bg_hdr,
            None,
        );

        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.bloom_radius,
            [1.0, 0.0],
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_a,
            None,
        );

        // Pass 4: blur vertical bloom_b -> bloom_a
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.bloom_radius,
            [0.0, 1.0],
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_b,
            None,
        );

        // Pass 5: composite to swapchain
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.bloom_radius,
            [0.0, 0.0],
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.bg_hdr,
            Some(&self.bg_bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
