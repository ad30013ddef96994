pub mod about;
pub mod animation;
pub mod color;
pub mod constants;
pub mod controls;
pub mod error;
pub mod params;
pub mod playback;
pub mod scene;
pub mod wave;

pub use animation::*;
pub use color::*;
pub use constants::*;
pub use error::*;
pub use params::*;
pub use playback::*;
pub use scene::*;
pub use wave::*;
