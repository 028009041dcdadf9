/// Pixel size of the render surface and everything derived from it.
///
/// Zero-sized dimensions are clamped to one pixel so targets can always be
/// created and divisions stay finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Returns true when the size actually changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let next = Self::new(width, height);
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Half-resolution size of the bloom ping-pong targets.
    pub fn bloom_size(&self) -> (u32, u32) {
        ((self.width / 2).max(1), (self.height / 2).max(1))
    }

    /// One-pixel step in UV space, as FXAA and the edge filters sample it.
    pub fn texel(&self) -> [f32; 2] {
        [1.0 / self.width as f32, 1.0 / self.height as f32]
    }

    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}
