pub mod keyboard;
pub mod keymap;
pub mod pointer;

pub use keyboard::{wire_global_keydown, KeyWiring};
pub use pointer::{wire_orbit_controls, OrbitWiring};
