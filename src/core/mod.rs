pub mod camera;
pub mod cards;
pub mod geometry;
pub mod layout;
pub mod physics;

pub use camera::*;
pub use cards::*;
pub use geometry::*;
pub use layout::*;
pub use physics::*;

// Shaders bundled as string constants
pub static CARDS_WGSL: &str = include_str!("../../shaders/cards.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
