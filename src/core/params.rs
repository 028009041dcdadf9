use thiserror::Error;

/// Shape of the per-beat amplitude envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BeatType {
    #[default]
    Sin,
    Pulse,
    Ease,
}

/// How the wave phase travels across a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MoveMode {
    #[default]
    LeftToRight,
    RightToLeft,
    CenterToEdge,
    EdgeToCenter,
    Random,
}

/// How line colors are assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    White,
    Gradient,
    Rainbow,
}

impl BeatType {
    pub const NAMES: &'static [&'static str] = &["sin", "pulse", "ease"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "pulse" => Some(Self::Pulse),
            "ease" => Some(Self::Ease),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Pulse => "pulse",
            Self::Ease => "ease",
        }
    }
}

impl MoveMode {
    pub const NAMES: &'static [&'static str] = &[
        "leftToRight",
        "rightToLeft",
        "centerToEdge",
        "edgeToCenter",
        "random",
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "leftToRight" => Some(Self::LeftToRight),
            "rightToLeft" => Some(Self::RightToLeft),
            "centerToEdge" => Some(Self::CenterToEdge),
            "edgeToCenter" => Some(Self::EdgeToCenter),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::LeftToRight => "leftToRight",
            Self::RightToLeft => "rightToLeft",
            Self::CenterToEdge => "centerToEdge",
            Self::EdgeToCenter => "edgeToCenter",
            Self::Random => "random",
        }
    }
}

impl ColorMode {
    pub const NAMES: &'static [&'static str] = &["white", "gradient", "rainbow"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "white" => Some(Self::White),
            "gradient" => Some(Self::Gradient),
            "rainbow" => Some(Self::Rainbow),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Gradient => "gradient",
            Self::Rainbow => "rainbow",
        }
    }
}

/// sRGB-encoded triple in 0..1, as picked on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(s: &str) -> Result<Self, ParamError> {
        let bad = || ParamError::BadColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(bad)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| bad());
        let (r, g, b) = match digits.len() {
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(bad()),
        };
        Ok(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    pub fn to_hex(self) -> String {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// The same color in linear light, as the HDR targets expect.
    pub fn to_linear(self) -> Self {
        Self::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        )
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Every tunable exposed on the control panel.
///
/// Field defaults match the look the visualizer ships with; ranges live in
/// [`PARAM_FIELDS`].
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    // waveform
    pub amplitude: f64,
    pub frequency: f64,
    pub phase_step: f64,
    pub noise_strength: f64,
    pub noise_frequency: f64,
    pub bpm: f64,
    pub beat_strength: f64,
    pub beat_type: BeatType,
    pub speed: f64,
    pub noise_speed: f64,
    pub y_offset: f64,
    // post-processing
    pub bloom: bool,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub bloom_threshold: f32,
    pub glitch: bool,
    pub film: bool,
    pub film_noise_intensity: f32,
    pub film_scanlines_intensity: f32,
    pub film_scanlines_count: f32,
    pub film_grayscale: bool,
    pub outline: bool,
    pub outline_color: Rgb,
    pub outline_strength: f32,
    pub fxaa: bool,
    // line colors
    pub color_mode: ColorMode,
    pub color1: Rgb,
    pub color2: Rgb,
    // motion
    pub move_mode: MoveMode,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            amplitude: 1.5,
            frequency: 0.18,
            phase_step: 0.12,
            noise_strength: 0.3,
            noise_frequency: 0.5,
            bpm: 120.0,
            beat_strength: 0.7,
            beat_type: BeatType::Sin,
            speed: 1.2,
            noise_speed: 0.7,
            y_offset: 0.0,
            bloom: true,
            bloom_strength: 1.2,
            bloom_radius: 0.2,
            bloom_threshold: 0.0,
            glitch: false,
            film: false,
            film_noise_intensity: 0.5,
            film_scanlines_intensity: 0.05,
            film_scanlines_count: 2048.0,
            film_grayscale: false,
            outline: false,
            outline_color: Rgb::new(0.0, 1.0, 1.0),
            outline_strength: 2.5,
            fxaa: false,
            color_mode: ColorMode::White,
            color1: Rgb::new(1.0, 1.0, 1.0),
            color2: Rgb::new(0.0, 1.0, 1.0),
            move_mode: MoveMode::LeftToRight,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownField(String),
    #[error("parameter `{0}` does not accept this kind of value")]
    WrongKind(&'static str),
    #[error("`{0}` is not a valid hex color")]
    BadColor(String),
    #[error("`{value}` is not an option of `{field}`")]
    UnknownOption { field: &'static str, value: String },
}

/// Panel folder a field is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamGroup {
    Wave,
    Effects,
    Color,
    Motion,
}

impl ParamGroup {
    pub const ALL: [ParamGroup; 4] = [Self::Wave, Self::Effects, Self::Color, Self::Motion];

    pub fn title(self) -> &'static str {
        match self {
            Self::Wave => "Waveform",
            Self::Effects => "Effects",
            Self::Color => "Line color",
            Self::Motion => "Motion",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Number { min: f64, max: f64, step: f64 },
    Toggle,
    Choice(&'static [&'static str]),
    Color,
}

/// Static description of one panel control.
#[derive(Clone, Copy, Debug)]
pub struct ParamField {
    pub key: &'static str,
    pub label: &'static str,
    pub group: ParamGroup,
    pub kind: FieldKind,
}

impl ParamField {
    /// Changing this field requires the grid colors to be rebuilt.
    pub fn affects_colors(&self) -> bool {
        self.group == ParamGroup::Color
    }
}

/// A value read from or written to a panel control.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Toggle(bool),
    Choice(&'static str),
    Color(Rgb),
}

const fn num(
    key: &'static str,
    label: &'static str,
    group: ParamGroup,
    min: f64,
    max: f64,
    step: f64,
) -> ParamField {
    ParamField {
        key,
        label,
        group,
        kind: FieldKind::Number { min, max, step },
    }
}

const fn toggle(key: &'static str, label: &'static str) -> ParamField {
    ParamField {
        key,
        label,
        group: ParamGroup::Effects,
        kind: FieldKind::Toggle,
    }
}

const fn choice(
    key: &'static str,
    label: &'static str,
    group: ParamGroup,
    options: &'static [&'static str],
) -> ParamField {
    ParamField {
        key,
        label,
        group,
        kind: FieldKind::Choice(options),
    }
}

const fn color(key: &'static str, label: &'static str, group: ParamGroup) -> ParamField {
    ParamField {
        key,
        label,
        group,
        kind: FieldKind::Color,
    }
}

use ParamGroup::{Color as C, Effects as E, Motion as M, Wave as W};

/// Panel layout in display order.
pub const PARAM_FIELDS: &[ParamField] = &[
    num("amplitude", "Amplitude", W, 0.0, 5.0, 0.01),
    num("frequency", "Frequency", W, 0.01, 1.0, 0.01),
    num("phaseStep", "Phase step", W, 0.0, 1.0, 0.01),
    num("noiseStrength", "Noise strength", W, 0.0, 2.0, 0.01),
    num("noiseFrequency", "Noise frequency", W, 0.01, 2.0, 0.01),
    num("bpm", "BPM", W, 30.0, 300.0, 1.0),
    num("beatStrength", "Beat strength", W, 0.0, 2.0, 0.01),
    num("speed", "Wave speed", W, 0.0, 5.0, 0.01),
    num("noiseSpeed", "Noise speed", W, 0.0, 5.0, 0.01),
    num("yOffset", "Y offset", W, -10.0, 10.0, 0.01),
    choice("beatType", "Beat type", W, BeatType::NAMES),
    toggle("bloom", "Bloom"),
    num("bloomStrength", "Bloom strength", E, 0.0, 3.0, 0.01),
    num("bloomRadius", "Bloom radius", E, 0.0, 1.0, 0.01),
    num("bloomThreshold", "Bloom threshold", E, 0.0, 1.0, 0.01),
    toggle("glitch", "Glitch"),
    toggle("film", "Film"),
    num("filmNoiseIntensity", "Film noise", E, 0.0, 1.0, 0.01),
    num("filmScanlinesIntensity", "Film scanlines", E, 0.0, 1.0, 0.01),
    num("filmScanlinesCount", "Film line count", E, 0.0, 4096.0, 1.0),
    toggle("filmGrayscale", "Film grayscale"),
    toggle("outline", "Outline"),
    color("outlineColor", "Outline color", E),
    num("outlineStrength", "Outline strength", E, 0.0, 10.0, 0.01),
    toggle("fxaa", "FXAA"),
    choice("colorMode", "Color mode", C, ColorMode::NAMES),
    color("color1", "Color 1", C),
    color("color2", "Color 2", C),
    choice("moveMode", "Motion", M, MoveMode::NAMES),
];

pub fn field(key: &str) -> Option<&'static ParamField> {
    PARAM_FIELDS.iter().find(|f| f.key == key)
}

impl Params {
    /// Read a field by its panel key.
    pub fn get(&self, key: &str) -> Result<ParamValue, ParamError> {
        use ParamValue::*;
        let v = match key {
            "amplitude" => Number(self.amplitude),
            "frequency" => Number(self.frequency),
            "phaseStep" => Number(self.phase_step),
            "noiseStrength" => Number(self.noise_strength),
            "noiseFrequency" => Number(self.noise_frequency),
            "bpm" => Number(self.bpm),
            "beatStrength" => Number(self.beat_strength),
            "speed" => Number(self.speed),
            "noiseSpeed" => Number(self.noise_speed),
            "yOffset" => Number(self.y_offset),
            "beatType" => Choice(self.beat_type.name()),
            "bloom" => Toggle(self.bloom),
            "bloomStrength" => Number(self.bloom_strength as f64),
            "bloomRadius" => Number(self.bloom_radius as f64),
            "bloomThreshold" => Number(self.bloom_threshold as f64),
            "glitch" => Toggle(self.glitch),
            "film" => Toggle(self.film),
            "filmNoiseIntensity" => Number(self.film_noise_intensity as f64),
            "filmScanlinesIntensity" => Number(self.film_scanlines_intensity as f64),
            "filmScanlinesCount" => Number(self.film_scanlines_count as f64),
            "filmGrayscale" => Toggle(self.film_grayscale),
            "outline" => Toggle(self.outline),
            "outlineColor" => Color(self.outline_color),
            "outlineStrength" => Number(self.outline_strength as f64),
            "fxaa" => Toggle(self.fxaa),
            "colorMode" => Choice(self.color_mode.name()),
            "color1" => Color(self.color1),
            "color2" => Color(self.color2),
            "moveMode" => Choice(self.move_mode.name()),
            _ => return Err(ParamError::UnknownField(key.to_string())),
        };
        Ok(v)
    }

    /// Write a numeric field, clamped to its panel range.
    pub fn set_number(&mut self, key: &str, value: f64) -> Result<(), ParamError> {
        let f = field(key).ok_or_else(|| ParamError::UnknownField(key.to_string()))?;
        let FieldKind::Number { min, max, .. } = f.kind else {
            return Err(ParamError::WrongKind(f.key));
        };
        if !value.is_finite() {
            return Err(ParamError::WrongKind(f.key));
        }
        let v = value.clamp(min, max);
        match f.key {
            "amplitude" => self.amplitude = v,
            "frequency" => self.frequency = v,
            "phaseStep" => self.phase_step = v,
            "noiseStrength" => self.noise_strength = v,
            "noiseFrequency" => self.noise_frequency = v,
            "bpm" => self.bpm = v,
            "beatStrength" => self.beat_strength = v,
            "speed" => self.speed = v,
            "noiseSpeed" => self.noise_speed = v,
            "yOffset" => self.y_offset = v,
            "bloomStrength" => self.bloom_strength = v as f32,
            "bloomRadius" => self.bloom_radius = v as f32,
            "bloomThreshold" => self.bloom_threshold = v as f32,
            "filmNoiseIntensity" => self.film_noise_intensity = v as f32,
            "filmScanlinesIntensity" => self.film_scanlines_intensity = v as f32,
            "filmScanlinesCount" => self.film_scanlines_count = v as f32,
            "outlineStrength" => self.outline_strength = v as f32,
            _ => return Err(ParamError::WrongKind(f.key)),
        }
        Ok(())
    }

    pub fn set_toggle(&mut self, key: &str, on: bool) -> Result<(), ParamError> {
        match key {
            "bloom" => self.bloom = on,
            "glitch" => self.glitch = on,
            "film" => self.film = on,
            "filmGrayscale" => self.film_grayscale = on,
            "outline" => self.outline = on,
            "fxaa" => self.fxaa = on,
            _ => return Err(Self::kind_error(key)),
        }
        Ok(())
    }

    pub fn set_choice(&mut self, key: &str, option: &str) -> Result<(), ParamError> {
        let unknown = |field: &'static str| ParamError::UnknownOption {
            field,
            value: option.to_string(),
        };
        match key {
            "beatType" => {
                self.beat_type = BeatType::from_name(option).ok_or_else(|| unknown("beatType"))?
            }
            "colorMode" => {
                self.color_mode = ColorMode::from_name(option).ok_or_else(|| unknown("colorMode"))?
            }
            "moveMode" => {
                self.move_mode = MoveMode::from_name(option).ok_or_else(|| unknown("moveMode"))?
            }
            _ => return Err(Self::kind_error(key)),
        }
        Ok(())
    }

    /// Write a color field from a hex string; the old value survives a parse failure.
    pub fn set_color(&mut self, key: &str, hex: &str) -> Result<(), ParamError> {
        let slot = match key {
            "outlineColor" => &mut self.outline_color,
            "color1" => &mut self.color1,
            "color2" => &mut self.color2,
            _ => return Err(Self::kind_error(key)),
        };
        *slot = Rgb::from_hex(hex)?;
        Ok(())
    }

    fn kind_error(key: &str) -> ParamError {
        match field(key) {
            Some(f) => ParamError::WrongKind(f.key),
            None => ParamError::UnknownField(key.to_string()),
        }
    }
}
