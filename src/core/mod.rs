pub mod catalog;
pub mod config;
pub mod constants;
pub mod layout;
pub mod picking;
pub mod placeholder;
pub mod session;
pub mod source;

pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use layout::*;
pub use picking::*;
pub use placeholder::*;
pub use session::*;
pub use source::*;

// Shaders bundled as string constants
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
pub static OUTLINE_WGSL: &str = include_str!("../../shaders/outline.wgsl");
pub static QUAD_WGSL: &str = include_str!("../../shaders/quad.wgsl");
