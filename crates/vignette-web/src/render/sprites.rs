use crate::constants::MAX_SPRITES;
use vignette_core::SceneEntities;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) cam_right: [f32; 4],
    pub(crate) cam_up: [f32; 4],
}

/// Per-entity instance data for the billboard pass.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos: [f32; 3],
    pub rot: f32,
    pub scale: [f32; 3],
    pub emissive: f32,
    pub color: [f32; 4],
}

/// Snapshot the registry into instance records, in load order.
pub fn sprite_instances(entities: &SceneEntities) -> Vec<SpriteInstance> {
    entities
        .entities()
        .iter()
        .map(|e| SpriteInstance {
            pos: e.position.to_array(),
            rot: e.rotation_y,
            scale: e.scale.to_array(),
            emissive: e.emissive_intensity,
            color: [e.color[0], e.color[1], e.color[2], 1.0],
        })
        .collect()
}

pub(crate) struct SpriteResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) quad_vb: wgpu::Buffer,
    pub(crate) instance_vb: wgpu::Buffer,
}

impl SpriteResources {
    /// Upload at most `MAX_SPRITES` instances, returning the draw count.
    pub(crate) fn write_instances(
        &self,
        queue: &wgpu::Queue,
        instances: &[SpriteInstance],
    ) -> u32 {
        let n = instances.len().min(MAX_SPRITES);
        if n > 0 {
            queue.write_buffer(
                &self.instance_vb,
                0,
                bytemuck::cast_slice(&instances[..n]),
            );
        }
        n as u32
    }
}

pub(crate) fn create_sprite_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
) -> SpriteResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sprites_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/sprites.wgsl").into()),
    });

    // Two-triangle unit quad, billboarded in the vertex stage
    let quad: &[[f32; 2]; 6] = &[
        [-0.5, -0.5],
        [0.5, -0.5],
        [0.5, 0.5],
        [-0.5, -0.5],
        [0.5, 0.5],
        [-0.5, 0.5],
    ];
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sprite_quad_vb"),
        contents: bytemuck::cast_slice(quad),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sprite_instance_vb"),
        size: (MAX_SPRITES * std::mem::size_of::<SpriteInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sprites_bgl"),
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
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("sprites_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("sprites_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let quad_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
    };
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SpriteInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &wgpu::vertex_attr_array![
            1 => Float32x3,
            2 => Float32,
            3 => Float32x3,
            4 => Float32,
            5 => Float32x4,
        ],
    };

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("sprites_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_sprite"),
            buffers: &[quad_layout, instance_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_sprite"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    SpriteResources {
        pipeline,
        uniform_buffer,
        bind_group,
        quad_vb,
        instance_vb,
    }
}
