use super::color::line_color;
use super::constants::{DEPTH_STEP, GRID_WIDTH, LINE_COUNT, POINTS_PER_LINE};
use super::params::Params;
use super::wave::{beat, beat_phase, height, phase, MotionTables};

/// One vertex of a wave line as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// The fixed lines × points grid of wave vertices.
///
/// Vertices are stored line-major: point `j` of line `i` lives at
/// `i * POINTS_PER_LINE + j`. `x` and `z` are fixed at construction; `y` is
/// rewritten by [`WaveGrid::update_heights`] every frame and colors only by
/// [`WaveGrid::recolor`].
pub struct WaveGrid {
    vertices: Vec<LineVertex>,
}

impl WaveGrid {
    pub fn new(params: &Params) -> Self {
        let mut vertices = Vec::with_capacity(LINE_COUNT * POINTS_PER_LINE);
        for i in 0..LINE_COUNT {
            let z = i as f32 * DEPTH_STEP - (LINE_COUNT as f32 * DEPTH_STEP) / 2.0;
            for j in 0..POINTS_PER_LINE {
                let x = (j as f32 / (POINTS_PER_LINE - 1) as f32) * GRID_WIDTH - GRID_WIDTH / 2.0;
                vertices.push(LineVertex {
                    position: [x, 0.0, z],
                    color: line_color(i, j, params).to_array(),
                });
            }
        }
        Self { vertices }
    }

    #[inline]
    fn index(i: usize, j: usize) -> usize {
        i * POINTS_PER_LINE + j
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    #[cfg(test)]
    pub fn line(&self, i: usize) -> &[LineVertex] {
        let start = Self::index(i, 0);
        &self.vertices[start..start + POINTS_PER_LINE]
    }

    #[cfg(test)]
    pub fn vertex(&self, i: usize, j: usize) -> &LineVertex {
        &self.vertices[Self::index(i, j)]
    }

    /// Recompute every `y` for time `t`.
    pub fn update_heights(&mut self, t: f64, params: &Params, tables: &mut MotionTables) {
        let b = beat(beat_phase(t, params.bpm), params.beat_strength, params.beat_type);
        for i in 0..LINE_COUNT {
            for j in 0..POINTS_PER_LINE {
                let p = phase(j, i, t, params, tables);
                let y = height(i, j, t, p, b, params);
                self.vertices[Self::index(i, j)].position[1] = y as f32;
            }
        }
    }

    /// Rebuild every vertex color from the current color settings.
    pub fn recolor(&mut self, params: &Params) {
        for i in 0..LINE_COUNT {
            for j in 0..POINTS_PER_LINE {
                self.vertices[Self::index(i, j)].color = line_color(i, j, params).to_array();
            }
        }
        log::debug!("[grid] recolored as {}", params.color_mode.name());
    }
}
