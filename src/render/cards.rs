use super::helpers;
use crate::constants::*;
use crate::core::{Camera, CardMesh, CardTransform, CardVertex, Rgb};
use crate::texture::CardTexture;
use glam::Vec3;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    ambient: [f32; 4],
    light_dir: [[f32; 4]; 3],
    light_color: [[f32; 4]; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CardUniforms {
    model: [[f32; 4]; 4],
    params: [f32; 4],
}

impl CardUniforms {
    pub(crate) fn from_transform(t: &CardTransform) -> Self {
        Self {
            model: t.model_matrix().to_cols_array_2d(),
            params: [t.opacity, ALPHA_TEST, 0.0, 0.0],
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

#[inline]
fn scaled_linear(hex: u32, intensity: f32) -> [f32; 4] {
    let [r, g, b, _] = Rgb::from_hex(hex).to_linear();
    [r * intensity, g * intensity, b * intensity, 1.0]
}

#[inline]
fn toward(position: [f32; 3]) -> [f32; 4] {
    Vec3::from(position).normalize().extend(0.0).to_array()
}

/// Camera and lights, packed for the card shader.
pub(crate) fn globals_for(camera: &Camera) -> Globals {
    Globals {
        view_proj: camera.view_projection().to_cols_array_2d(),
        ambient: scaled_linear(AMBIENT_COLOR, AMBIENT_INTENSITY),
        light_dir: [
            toward(KEY_LIGHT_POSITION),
            toward(RIM_LIGHT_POSITION),
            toward(FILL_LIGHT_POSITION),
        ],
        light_color: [
            scaled_linear(KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY),
            scaled_linear(RIM_LIGHT_COLOR, RIM_LIGHT_INTENSITY),
            scaled_linear(FILL_LIGHT_COLOR, FILL_LIGHT_INTENSITY),
        ],
    }
}

/// Pipeline plus the mesh and bindings shared by every card.
pub(crate) struct CardPipeline {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) globals_bg: wgpu::BindGroup,
    card_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

/// Per-card texture and transform uniforms.
pub(crate) struct CardGpu {
    _texture: wgpu::Texture,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_card_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    mesh: &CardMesh,
) -> CardPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("cards_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::CARDS_WGSL.into()),
    });
    let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("cards_globals_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let card_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("card_bgl"),
        entries: &[
            helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("cards_pl"),
        bind_group_layouts: &[&globals_bgl, &card_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("cards_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_card"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<CardVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // Cards are double-sided.
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_card"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let globals_buffer = helpers::uniform_buffer::<Globals>(device, "cards_globals");
    let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("cards_globals_bg"),
        layout: &globals_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: globals_buffer.as_entire_binding(),
        }],
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("card_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("card_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("card_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    CardPipeline {
        pipeline,
        globals_buffer,
        globals_bg,
        card_bgl,
        sampler,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
    }
}

pub(crate) fn upload_card(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    cards: &CardPipeline,
    image: &CardTexture,
    label: &str,
) -> CardGpu {
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let (texture, view) = helpers::create_texture(
        device,
        label,
        image.width,
        image.height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width),
            rows_per_image: Some(image.height),
        },
        size,
    );
    let uniform_buffer = helpers::uniform_buffer::<CardUniforms>(device, label);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: &cards.card_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&cards.sampler),
            },
        ],
    });
    CardGpu {
        _texture: texture,
        uniform_buffer,
        bind_group,
    }
}

/// Draw order for alpha blending: furthest card first.
pub(crate) fn back_to_front(transforms: &[CardTransform]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..transforms.len()).collect();
    order.sort_by(|&a, &b| transforms[a].position.z.total_cmp(&transforms[b].position.z));
    order
}
