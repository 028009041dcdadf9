use super::helpers;
use crate::constants::BLUR_MAX_TAPS_SCALE;
use crate::core::{GlitchFrame, Params, Viewport};
use wgpu;

/// Shared uniform block for every fullscreen post step. Field order mirrors
/// `PostUniforms` in post.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) texel: [f32; 2],
    pub(crate) blur_dir: [f32; 2],
    pub(crate) time: f32,
    pub(crate) bloom_strength: f32,
    pub(crate) blur_spread: f32,
    pub(crate) bloom_threshold: f32,
    pub(crate) film_noise: f32,
    pub(crate) film_scan_intensity: f32,
    pub(crate) film_scan_count: f32,
    pub(crate) film_grayscale: f32,
    pub(crate) outline_strength: f32,
    pub(crate) glitch_amount: f32,
    pub(crate) outline_color: [f32; 4],
    pub(crate) glitch_angle: f32,
    pub(crate) glitch_seed: f32,
    pub(crate) glitch_seed_x: f32,
    pub(crate) glitch_seed_y: f32,
    pub(crate) glitch_distortion_x: f32,
    pub(crate) glitch_distortion_y: f32,
    pub(crate) glitch_col_s: f32,
    pub(crate) glitch_bypass: f32,
}

impl PostUniforms {
    pub(crate) fn from_frame(
        params: &Params,
        viewport: Viewport,
        time: f32,
        glitch: &GlitchFrame,
    ) -> Self {
        let [r, g, b] = params.outline_color.to_linear().to_array();
        Self {
            resolution: viewport.resolution(),
            texel: viewport.texel(),
            blur_dir: [0.0, 0.0],
            time,
            bloom_strength: params.bloom_strength,
            blur_spread: 1.0 + params.bloom_radius * BLUR_MAX_TAPS_SCALE,
            bloom_threshold: params.bloom_threshold,
            film_noise: params.film_noise_intensity,
            film_scan_intensity: params.film_scanlines_intensity,
            film_scan_count: params.film_scanlines_count,
            film_grayscale: if params.film_grayscale { 1.0 } else { 0.0 },
            outline_strength: params.outline_strength,
            glitch_amount: glitch.amount,
            outline_color: [r, g, b, 1.0],
            glitch_angle: glitch.angle,
            glitch_seed: glitch.seed,
            glitch_seed_x: glitch.seed_x,
            glitch_seed_y: glitch.seed_y,
            glitch_distortion_x: glitch.distortion_x,
            glitch_distortion_y: glitch.distortion_y,
            glitch_col_s: glitch.col_s,
            glitch_bypass: if glitch.bypass { 1.0 } else { 0.0 },
        }
    }

    /// Same block, addressed at the half-res bloom buffers.
    pub(crate) fn at_bloom_size(mut self, viewport: Viewport, dir: [f32; 2]) -> Self {
        let (w, h) = viewport.bloom_size();
        self.resolution = [w as f32, h as f32];
        self.texel = [1.0 / w as f32, 1.0 / h as f32];
        self.blur_dir = dir;
        self
    }
}

/// One uniform buffer per step so each pass in a single submit sees its own values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PostStep {
    Bright,
    BlurH,
    BlurV,
    BloomComposite,
    Glitch,
    Film,
    Outline,
    Fxaa,
    Present,
}

impl PostStep {
    pub(crate) const ALL: [PostStep; 9] = [
        PostStep::Bright,
        PostStep::BlurH,
        PostStep::BlurV,
        PostStep::BloomComposite,
        PostStep::Glitch,
        PostStep::Film,
        PostStep::Outline,
        PostStep::Fxaa,
        PostStep::Present,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            PostStep::Bright => "post_bright",
            PostStep::BlurH => "post_blur_h",
            PostStep::BlurV => "post_blur_v",
            PostStep::BloomComposite => "post_bloom_composite",
            PostStep::Glitch => "post_glitch",
            PostStep::Film => "post_film",
            PostStep::Outline => "post_outline",
            PostStep::Fxaa => "post_fxaa",
            PostStep::Present => "present",
        }
    }
}

pub(crate) struct PostResources {
    bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    bgl1: wgpu::BindGroupLayout, // tex+sampler
    sampler: wgpu::Sampler,
    uniforms: Vec<wgpu::Buffer>,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    glitch_pipeline: wgpu::RenderPipeline,
    film_pipeline: wgpu::RenderPipeline,
    outline_pipeline: wgpu::RenderPipeline,
    fxaa_pipeline: wgpu::RenderPipeline,
    present_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
    });
    let [tex0, samp0] = helpers::texture_layout_entries(0);
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[tex0, samp0, helpers::uniform_layout_entry(2)],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &helpers::texture_layout_entries(0),
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let uniforms = PostStep::ALL
        .iter()
        .map(|step| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("post_uniforms_{:?}", step)),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        })
        .collect();

    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_1"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let make = |layout: &wgpu::PipelineLayout, entry: &str, format: wgpu::TextureFormat| {
        helpers::make_post_pipeline(device, layout, &shader, entry, format)
    };

    PostResources {
        bright_pipeline: make(&pl_single, "fs_bright", hdr_format),
        blur_pipeline: make(&pl_single, "fs_blur", hdr_format),
        composite_pipeline: make(&pl_composite, "fs_bloom_composite", hdr_format),
        glitch_pipeline: make(&pl_single, "fs_glitch", hdr_format),
        film_pipeline: make(&pl_single, "fs_film", hdr_format),
        outline_pipeline: make(&pl_single, "fs_outline", hdr_format),
        fxaa_pipeline: make(&pl_single, "fs_fxaa", hdr_format),
        present_pipeline: make(&pl_single, "fs_present", swap_format),
        bgl0,
        bgl1,
        sampler,
        uniforms,
    }
}

impl PostResources {
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, step: PostStep, u: &PostUniforms) {
        queue.write_buffer(&self.uniforms[step.index()], 0, bytemuck::bytes_of(u));
    }

    /// Group 0: the pass input plus this step's uniforms.
    fn source_group(
        &self,
        device: &wgpu::Device,
        step: PostStep,
        src: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("post_bg0"),
            layout: &self.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(src),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniforms[step.index()].as_entire_binding(),
                },
            ],
        })
    }

    /// Group 1: a second texture, used by the bloom composite.
    fn extra_group(
        &self,
        device: &wgpu::Device,
        tex: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("post_bg1"),
            layout: &self.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(tex),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }

    fn pipeline(&self, step: PostStep) -> &wgpu::RenderPipeline {
        match step {
            PostStep::Bright => &self.bright_pipeline,
            PostStep::BlurH | PostStep::BlurV => &self.blur_pipeline,
            PostStep::BloomComposite => &self.composite_pipeline,
            PostStep::Glitch => &self.glitch_pipeline,
            PostStep::Film => &self.film_pipeline,
            PostStep::Outline => &self.outline_pipeline,
            PostStep::Fxaa => &self.fxaa_pipeline,
            PostStep::Present => &self.present_pipeline,
        }
    }

    /// Full-screen draw of `step` reading `src` into `dst`. `extra` is bound
    /// as group 1 (only the bloom composite uses it).
    pub(crate) fn draw(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        step: PostStep,
        src: &wgpu::TextureView,
        dst: &wgpu::TextureView,
        extra: Option<&wgpu::TextureView>,
    ) {
        let bg0 = self.source_group(device, step, src);
        let bg1 = extra.map(|tex| self.extra_group(device, tex));
        let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(step.label()),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: dst,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        r.set_pipeline(self.pipeline(step));
        r.set_bind_group(0, &bg0, &[]);
        if let Some(g1) = &bg1 {
            r.set_bind_group(1, g1, &[]);
        }
        r.draw(0..3, 0..1);
    }
}
