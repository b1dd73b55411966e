use crate::constants::{BACKDROP_COLORS, CARD_HEIGHT, CARD_SEGMENTS, CARD_WIDTH};
use crate::core::{curved_card_mesh, Camera, CardTransform, Rgb};
use crate::texture::CardTexture;
use web_sys as web;

mod backdrop;
mod cards;
mod helpers;

use backdrop::{create_backdrop_resources, BackdropResources, BackdropUniforms};
use cards::{CardGpu, CardPipeline, CardUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    backdrop: BackdropResources,
    card_pipeline: CardPipeline,
    cards: Vec<CardGpu>,
    camera: Camera,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        textures: &[CardTexture],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let backdrop = create_backdrop_resources(&device, format);
        let mesh = curved_card_mesh(CARD_WIDTH, CARD_HEIGHT, CARD_SEGMENTS, CARD_SEGMENTS);
        let card_pipeline = cards::create_card_pipeline(&device, format, &mesh);
        let cards = textures
            .iter()
            .enumerate()
            .map(|(i, tex)| {
                cards::upload_card(&device, &queue, &card_pipeline, tex, &format!("card_{i}"))
            })
            .collect::<Vec<_>>();
        log::info!(
            "[gpu] ready {}x{} format={:?} cards={} mesh_vertices={}",
            width,
            height,
            format,
            cards.len(),
            mesh.vertices.len()
        );

        let mut camera = Camera::carousel(1.0);
        camera.set_viewport(width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            backdrop,
            card_pipeline,
            cards,
            camera,
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
            (self._depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
            self.camera.set_viewport(width, height);
        }
    }

    /// Re-apply the current surface configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw one frame; `transforms[i]` places card `i`.
    pub fn render(&mut self, transforms: &[CardTransform]) -> Result<(), wgpu::SurfaceError> {
        let [center, middle, edge] = BACKDROP_COLORS.map(|hex| Rgb::from_hex(hex).to_linear());
        let backdrop = BackdropUniforms {
            resolution: [self.width as f32, self.height as f32],
            _pad: [0.0; 2],
            center,
            middle,
            edge,
        };
        self.queue.write_buffer(
            &self.backdrop.uniform_buffer,
            0,
            bytemuck::bytes_of(&backdrop),
        );
        self.queue.write_buffer(
            &self.card_pipeline.globals_buffer,
            0,
            bytemuck::bytes_of(&cards::globals_for(&self.camera)),
        );
        let count = transforms.len().min(self.cards.len());
        for (gpu, t) in self.cards.iter().zip(transforms) {
            self.queue.write_buffer(
                &gpu.uniform_buffer,
                0,
                bytemuck::bytes_of(&CardUniforms::from_transform(t)),
            );
        }

        let frame = self.surface.get_current_texture()?;
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
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
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
            rpass.set_pipeline(&self.backdrop.pipeline);
            rpass.set_bind_group(0, &self.backdrop.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            rpass.set_pipeline(&self.card_pipeline.pipeline);
            rpass.set_bind_group(0, &self.card_pipeline.globals_bg, &[]);
            rpass.set_vertex_buffer(0, self.card_pipeline.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.card_pipeline.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            for i in cards::back_to_front(&transforms[..count]) {
                rpass.set_bind_group(1, &self.cards[i].bind_group, &[]);
                rpass.draw_indexed(0..self.card_pipeline.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
