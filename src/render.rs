use crate::constants::CLEAR_COLOR;
use crate::core::{pass_plan, GlitchFrame, LineVertex, Params, PassKind, Viewport};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod lines;
mod post;
mod targets;
use lines::{create_lines_resources, LinesResources, LinesUniforms};
use post::{PostResources, PostStep, PostUniforms};
use targets::{RenderTargets, HDR_FORMAT};

/// Everything one frame needs from the rest of the app.
pub struct FrameInputs<'f> {
    pub vertices: &'f [LineVertex],
    pub view_proj: Mat4,
    pub params: &'f Params,
    pub glitch: GlitchFrame,
    pub time: f32,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Slot {
    Hdr,
    PostA,
    PostB,
}

impl Slot {
    fn next(self) -> Slot {
        match self {
            Slot::PostA => Slot::PostB,
            _ => Slot::PostA,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    lines: LinesResources,
    targets: RenderTargets,
    post: PostResources,
    viewport: Viewport,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let viewport = Viewport::new(canvas.width(), canvas.height());

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
            width: viewport.width,
            height: viewport.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let lines = create_lines_resources(&device);
        let targets = RenderTargets::new(&device, viewport);
        let post = post::create_post_resources(&device, HDR_FORMAT, format);
        let [r, g, b, a] = CLEAR_COLOR;

        log::info!(
            "[gpu] ready {}x{} surface {:?}",
            viewport.width,
            viewport.height,
            format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            lines,
            targets,
            post,
            viewport,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    /// Reconfigure the surface and rebuild size-dependent targets when the
    /// backing size changed. Returns true if anything was rebuilt.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if !self.viewport.resize(width, height) {
            return false;
        }
        self.config.width = self.viewport.width;
        self.config.height = self.viewport.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.viewport);
        true
    }

    fn slot_view(&self, slot: Slot) -> &wgpu::TextureView {
        match slot {
            Slot::Hdr => &self.targets.hdr.view,
            Slot::PostA => &self.targets.post_a.view,
            Slot::PostB => &self.targets.post_b.view,
        }
    }

    fn post_step(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        step: PostStep,
        src: &wgpu::TextureView,
        dst: &wgpu::TextureView,
    ) {
        self.post.draw(&self.device, encoder, step, src, dst, None);
    }

    fn encode_bloom(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        src: &wgpu::TextureView,
        dst: &wgpu::TextureView,
    ) {
        let (post, device) = (&self.post, &self.device);
        let bloom_a = &self.targets.bloom_a.view;
        let bloom_b = &self.targets.bloom_b.view;
        post.draw(device, encoder, PostStep::Bright, src, bloom_a, None);
        post.draw(device, encoder, PostStep::BlurH, bloom_a, bloom_b, None);
        post.draw(device, encoder, PostStep::BlurV, bloom_b, bloom_a, None);
        post.draw(device, encoder, PostStep::BloomComposite, src, dst, Some(bloom_a));
    }

    fn write_post_uniforms(&self, base: PostUniforms) {
        let vp = self.viewport;
        let q = &self.queue;
        self.post
            .write_uniforms(q, PostStep::Bright, &base.at_bloom_size(vp, [0.0, 0.0]));
        self.post
            .write_uniforms(q, PostStep::BlurH, &base.at_bloom_size(vp, [1.0, 0.0]));
        self.post
            .write_uniforms(q, PostStep::BlurV, &base.at_bloom_size(vp, [0.0, 1.0]));
        for step in [
            PostStep::BloomComposite,
            PostStep::Glitch,
            PostStep::Film,
            PostStep::Outline,
            PostStep::Fxaa,
            PostStep::Present,
        ] {
            self.post.write_uniforms(q, step, &base);
        }
    }

    pub fn render(&mut self, frame: &FrameInputs) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let swap_view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.lines.vertex_buffer,
            0,
            bytemuck::cast_slice(frame.vertices),
        );
        let cam = LinesUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.lines.uniform_buffer, 0, bytemuck::bytes_of(&cam));
        self.write_post_uniforms(PostUniforms::from_frame(
            frame.params,
            self.viewport,
            frame.time,
            &frame.glitch,
        ));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame"),
            });

        // Scene: multisampled line strips resolved into the HDR target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_msaa.view,
                    resolve_target: Some(&self.targets.hdr.view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            lines::draw_lines(&mut rpass, &self.lines);
        }

        // Effects in fixed order; each reads the previous output
        let mut src = Slot::Hdr;
        for pass in pass_plan(frame.params) {
            let dst = src.next();
            let (src_view, dst_view) = (self.slot_view(src), self.slot_view(dst));
            match pass {
                PassKind::Bloom => self.encode_bloom(&mut encoder, src_view, dst_view),
                PassKind::Glitch => self.post_step(&mut encoder, PostStep::Glitch, src_view, dst_view),
                PassKind::Film => self.post_step(&mut encoder, PostStep::Film, src_view, dst_view),
                PassKind::Outline => {
                    self.post_step(&mut encoder, PostStep::Outline, src_view, dst_view)
                }
                PassKind::Fxaa => self.post_step(&mut encoder, PostStep::Fxaa, src_view, dst_view),
            }
            src = dst;
        }

        self.post_step(&mut encoder, PostStep::Present, self.slot_view(src), &swap_view);

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
