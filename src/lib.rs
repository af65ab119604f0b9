//! Projects a freehand drawing as a textured plane into a world-tracked AR
//! scene and lets the user move and scale it with pinch and pan gestures.
//!
//! The crate is platform-free: a host supplies the drawing, the world-tracking
//! service and the gesture streams, and renders the [`PlaneNode`] it gets back.

pub mod config;
pub mod constants;
pub mod drawing;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod record;
pub mod scene;
pub mod session;
pub mod texture;
pub mod view;

pub static PLANE_WGSL: &str = include_str!("../shaders/plane.wgsl");

pub use config::*;
pub use constants::*;
pub use drawing::*;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use record::*;
pub use scene::*;
pub use session::*;
pub use texture::*;
pub use view::*;
