pub mod color;
pub mod constants;
pub mod glitch;
pub mod grid;
pub mod params;
pub mod post;
pub mod viewport;
pub mod wave;

pub use glitch::*;
pub use grid::*;
pub use params::*;
pub use post::*;
pub use viewport::*;
pub use wave::*;

// Shaders bundled as string constants
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
