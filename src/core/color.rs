use super::constants::{LINE_COUNT, POINTS_PER_LINE};
use super::params::{ColorMode, Params, Rgb};

/// Linear-light color of point `j` on line `i` for the current color settings.
///
/// Panel colors and HSL hues are sRGB and are decoded before blending.
pub fn line_color(i: usize, j: usize, params: &Params) -> Rgb {
    match params.color_mode {
        ColorMode::White => params.color1.to_linear(),
        ColorMode::Gradient => {
            let t = i as f32 / (LINE_COUNT - 1) as f32;
            lerp(params.color1.to_linear(), params.color2.to_linear(), t)
        }
        ColorMode::Rainbow => {
            let t = j as f32 / (POINTS_PER_LINE - 1) as f32;
            hsl_to_rgb(t, 1.0, 0.5).to_linear()
        }
    }
}

/// Blend `a` toward `b`; exact at both ends of `t`.
#[inline]
pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let mix = |x: f32, y: f32| x * (1.0 - t) + y * t;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// HSL to RGB with hue wrapped into `[0, 1)`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Rgb::new(l, l, l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
