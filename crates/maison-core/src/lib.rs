pub mod constants;
pub mod content;
pub mod mesh;
pub mod spring;
pub mod state;
pub mod viewer;

pub static VIEWER_WGSL: &str = include_str!("../shaders/viewer.wgsl");

pub use constants::*;
pub use content::*;
pub use mesh::*;
pub use spring::*;
pub use state::*;
pub use viewer::*;
