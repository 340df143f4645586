pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod info;
pub mod lyrics;
pub mod paint;
pub mod panel;
pub mod playback;
pub mod theme;
pub mod timeline;

pub static STROKE_WGSL: &str = include_str!("../shaders/stroke.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use lyrics::*;
pub use paint::*;
pub use panel::*;
pub use playback::*;
pub use theme::*;
pub use timeline::*;
