use super::helpers;
use crate::core::Viewport;
use wgpu;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const SCENE_SAMPLE_COUNT: u32 = 4;

pub(crate) struct ColorTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl ColorTarget {
    fn new(device: &wgpu::Device, label: &str, size: (u32, u32), samples: u32) -> Self {
        let mut usage = wgpu::TextureUsages::RENDER_ATTACHMENT;
        if samples == 1 {
            usage |= wgpu::TextureUsages::TEXTURE_BINDING;
        }
        let (tex, view) =
            helpers::create_color_texture(device, label, size.0, size.1, HDR_FORMAT, samples, usage);
        Self { tex, view }
    }
}

/// Offscreen color targets for the render pipeline.
///
/// - `scene_msaa` is the multisampled line target, resolved into `hdr`.
/// - `bloom_*` are half-res buffers used for bright-pass and blur.
/// - `post_*` are full-res ping-pong buffers the effect chain alternates between.
pub(crate) struct RenderTargets {
    pub(crate) scene_msaa: ColorTarget,
    pub(crate) hdr: ColorTarget,
    pub(crate) bloom_a: ColorTarget,
    pub(crate) bloom_b: ColorTarget,
    pub(crate) post_a: ColorTarget,
    pub(crate) post_b: ColorTarget,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, viewport: Viewport) -> Self {
        let full = (viewport.width, viewport.height);
        let half = viewport.bloom_size();
        Self {
            scene_msaa: ColorTarget::new(device, "scene_msaa", full, SCENE_SAMPLE_COUNT),
            hdr: ColorTarget::new(device, "hdr_tex", full, 1),
            bloom_a: ColorTarget::new(device, "bloom_a", half, 1),
            bloom_b: ColorTarget::new(device, "bloom_b", half, 1),
            post_a: ColorTarget::new(device, "post_a", full, 1),
            post_b: ColorTarget::new(device, "post_b", full, 1),
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, viewport: Viewport) {
        *self = Self::new(device, viewport);
        log::debug!(
            "[gpu] render targets {}x{} (bloom {:?})",
            self.hdr.tex.width(),
            self.hdr.tex.height(),
            viewport.bloom_size()
        );
    }
}
