// Host-side tests for the wave grid.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod wave {
        include!("../src/core/wave.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod grid {
        include!("../src/core/grid.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use crate::camera::OrbitCamera;
use crate::core::constants::*;
use crate::core::grid::*;
use crate::core::params::*;
use crate::core::viewport::*;
use crate::core::wave::*;

// Full per-point evaluation, the way one frame computes it.
fn wave_height(i: usize, j: usize, t: f64, params: &Params, tables: &mut MotionTables) -> f64 {
    let b = beat(beat_phase(t, params.bpm), params.beat_strength, params.beat_type);
    let p = phase(j, i, t, params, tables);
    height(i, j, t, p, b, params)
}

fn heights(grid: &WaveGrid) -> Vec<f32> {
    grid.vertices().iter().map(|v| v.position[1]).collect()
}

#[test]
fn grid_has_every_line_and_point() {
    let grid = WaveGrid::new(&Params::default());
    assert_eq!(grid.vertices().len(), LINE_COUNT * POINTS_PER_LINE);
    for i in 0..LINE_COUNT {
        assert_eq!(grid.line(i).len(), POINTS_PER_LINE);
    }
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    let grid = WaveGrid::new(&Params::default());
    let bytes: &[u8] = bytemuck::cast_slice(grid.vertices());
    assert_eq!(bytes.len(), LINE_COUNT * POINTS_PER_LINE * 24);
}

#[test]
fn x_spans_the_grid_width_and_z_steps_per_line() {
    let grid = WaveGrid::new(&Params::default());
    let first = grid.vertex(0, 0).position;
    let last = grid.vertex(0, POINTS_PER_LINE - 1).position;
    assert!((first[0] + GRID_WIDTH / 2.0).abs() < 1e-5);
    assert!((last[0] - GRID_WIDTH / 2.0).abs() < 1e-5);
    assert!((first[2] + LINE_COUNT as f32 * DEPTH_STEP / 2.0).abs() < 1e-5);
    for i in 1..LINE_COUNT {
        let dz = grid.vertex(i, 0).position[2] - grid.vertex(i - 1, 0).position[2];
        assert!((dz - DEPTH_STEP).abs() < 1e-5);
    }
    // every point on a line shares its z
    let z = grid.vertex(7, 0).position[2];
    assert!(grid.line(7).iter().all(|v| v.position[2] == z));
}

#[test]
fn new_grid_starts_flat() {
    let grid = WaveGrid::new(&Params::default());
    assert!(heights(&grid).iter().all(|&y| y == 0.0));
}

#[test]
fn update_heights_matches_the_height_function() {
    let p = Params::default();
    let mut grid = WaveGrid::new(&p);
    let mut tables = MotionTables::new(0);
    let t = 2.34;
    grid.update_heights(t, &p, &mut tables);
    let mut check = MotionTables::new(0);
    for (i, j) in [(0, 0), (5, 60), (LINE_COUNT - 1, POINTS_PER_LINE - 1)] {
        let expected = wave_height(i, j, t, &p, &mut check) as f32;
        assert_eq!(grid.vertex(i, j).position[1], expected);
    }
}

#[test]
fn update_heights_leaves_x_z_and_colors_alone() {
    let p = Params::default();
    let mut grid = WaveGrid::new(&p);
    let before: Vec<LineVertex> = grid.vertices().to_vec();
    grid.update_heights(1.0, &p, &mut MotionTables::new(0));
    for (a, b) in before.iter().zip(grid.vertices()) {
        assert_eq!(a.position[0], b.position[0]);
        assert_eq!(a.position[2], b.position[2]);
        assert_eq!(a.color, b.color);
    }
}

#[test]
fn random_mode_lines_keep_their_motion_across_frames() {
    let p = Params {
        move_mode: MoveMode::Random,
        ..Params::default()
    };
    let mut grid = WaveGrid::new(&p);
    let mut tables = MotionTables::new(21);
    grid.update_heights(0.5, &p, &mut tables);
    let snapshot: Vec<LineMotion> = (0..LINE_COUNT).map(|i| tables.line(i)).collect();
    for k in 1..5 {
        grid.update_heights(0.5 + k as f64 / 60.0, &p, &mut tables);
    }
    let later: Vec<LineMotion> = (0..LINE_COUNT).map(|i| tables.line(i)).collect();
    assert_eq!(snapshot, later);
}

#[test]
fn recolor_applies_new_color_settings() {
    let mut p = Params::default();
    let mut grid = WaveGrid::new(&p);
    assert_eq!(grid.vertex(0, 0).color, [1.0, 1.0, 1.0]);

    p.color_mode = ColorMode::Gradient;
    p.color1 = Rgb::new(1.0, 0.0, 0.0);
    p.color2 = Rgb::new(0.0, 0.0, 1.0);
    grid.recolor(&p);
    assert_eq!(grid.vertex(0, 30).color, [1.0, 0.0, 0.0]);
    assert_eq!(grid.vertex(LINE_COUNT - 1, 30).color, [0.0, 0.0, 1.0]);
}

#[test]
fn vertex_colors_are_stored_in_linear_light() {
    let mut p = Params::default();
    p.set_color("color1", "#808080").unwrap();
    let grid = WaveGrid::new(&p);
    let c = grid.vertex(3, 9).color;
    assert_eq!(c, Rgb::from_hex("#808080").unwrap().to_linear().to_array());
    // an sRGB surface encodes this back to the picked 0x80
    let shown = 1.055 * c[0].powf(1.0 / 2.4) - 0.055;
    assert_eq!((shown * 255.0).round() as u8, 0x80);
}

#[test]
fn recolor_keeps_heights() {
    let p = Params::default();
    let mut grid = WaveGrid::new(&p);
    grid.update_heights(3.0, &p, &mut MotionTables::new(0));
    let before = heights(&grid);
    let q = Params {
        color_mode: ColorMode::Rainbow,
        ..p
    };
    grid.recolor(&q);
    assert_eq!(before, heights(&grid));
}

#[test]
fn resizing_the_viewport_leaves_line_heights_unchanged() {
    let p = Params::default();
    let mut resized = WaveGrid::new(&p);
    let mut steady = WaveGrid::new(&p);
    let mut tr = MotionTables::new(4);
    let mut ts = MotionTables::new(4);
    let mut camera = OrbitCamera::default_view(800.0 / 600.0);
    let mut viewport = Viewport::new(800, 600);

    for frame in 0..10 {
        let t = frame as f64 / 60.0;
        resized.update_heights(t, &p, &mut tr);
        steady.update_heights(t, &p, &mut ts);
        // the frame loop follows the canvas: camera aspect, then targets
        let (w, h) = if frame < 5 { (800, 600) } else { (1920, 400) };
        camera.set_aspect(w, h);
        camera.update();
        let changed = viewport.resize(w, h);
        assert_eq!(changed, frame == 5);
        assert_eq!(resized.vertices(), steady.vertices());
    }
    assert_eq!(viewport, Viewport::new(1920, 400));
    assert!((camera.aspect() - 1920.0 / 400.0).abs() < 1e-6);

    // heights computed after the resize match a grid that never saw one
    resized.update_heights(0.75, &p, &mut tr);
    steady.update_heights(0.75, &p, &mut ts);
    assert_eq!(heights(&resized), heights(&steady));
}

#[test]
fn viewport_clamps_and_reports_changes() {
    let mut v = Viewport::new(0, 0);
    assert_eq!((v.width, v.height), (1, 1));
    assert!(!v.resize(1, 1));
    assert!(v.resize(641, 481));
    assert_eq!(v.bloom_size(), (320, 240));
    assert!((v.aspect() - 641.0 / 481.0).abs() < 1e-6);
    let [tx, ty] = v.texel();
    assert!((tx - 1.0 / 641.0).abs() < 1e-9 && (ty - 1.0 / 481.0).abs() < 1e-9);
    assert!(!v.resize(641, 481));
    assert!(v.resize(1, 3));
    assert_eq!(v.bloom_size(), (1, 1));
}
