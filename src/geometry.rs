//! Plane geometry builder.
//!
//! Sizes a rectangle to the drawing's aspect ratio inside a fixed real-world
//! width, attaches the baked drawing as its only material and wraps it in a
//! node at the default pose.

use crate::config::ArConfig;
use crate::constants::{DEFAULT_NODE_SCALE, FALLBACK_ASPECT_RATIO};
use crate::drawing::DrawingSnapshot;
use crate::gesture::clamp_scale;
use crate::scene::{NodeTransform, PlaneNode};
use crate::texture::{self, BakedTexture};
use glam::Vec2;

/// Returns `aspect` when usable, otherwise the square fallback.
#[inline]
pub fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        FALLBACK_ASPECT_RATIO
    }
}

/// Plane `(width, height)` for a drawing of the given aspect ratio.
///
/// Extreme but finite ratios can overflow or underflow the height; those
/// get the square fallback too.
#[inline]
pub fn plane_size(aspect: f32, reference_width: f32) -> Vec2 {
    let height = reference_width / sanitize_aspect(aspect);
    if height.is_finite() && height > 0.0 {
        Vec2::new(reference_width, height)
    } else {
        Vec2::new(reference_width, reference_width / FALLBACK_ASPECT_RATIO)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse: BakedTexture,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Rectangle in the node's local XY plane, facing +Z, centred on the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneGeometry {
    width: f32,
    height: f32,
    material: Material,
}

impl PlaneGeometry {
    pub const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

    pub fn new(size: Vec2, material: Material) -> Self {
        Self {
            width: size.x,
            height: size.y,
            material,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Counter-clockwise corners starting bottom-left; UV origin is the
    /// texture's top-left so the drawing appears upright.
    pub fn vertices(&self) -> [PlaneVertex; 4] {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        [
            PlaneVertex {
                position: [-hw, -hh, 0.0],
                uv: [0.0, 1.0],
            },
            PlaneVertex {
                position: [hw, -hh, 0.0],
                uv: [1.0, 1.0],
            },
            PlaneVertex {
                position: [hw, hh, 0.0],
                uv: [1.0, 0.0],
            },
            PlaneVertex {
                position: [-hw, hh, 0.0],
                uv: [0.0, 0.0],
            },
        ]
    }
}

/// Builds the single plane node of an AR session from a drawing snapshot.
#[derive(Clone, Copy, Debug)]
pub struct PlaneBuilder {
    config: ArConfig,
}

impl PlaneBuilder {
    pub fn new(config: ArConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, snapshot: &DrawingSnapshot) -> PlaneNode {
        let diffuse = texture::bake(snapshot, self.config.bake_scale, self.config.max_texture_edge);
        let aspect = snapshot.aspect_ratio();
        if sanitize_aspect(aspect) != aspect {
            log::warn!(
                "[plane] invalid aspect ratio {}; falling back to {}",
                aspect,
                FALLBACK_ASPECT_RATIO
            );
        }
        let size = plane_size(aspect, self.config.reference_width);
        log::info!(
            "[plane] built {:.3}x{:.3} plane with {}x{} texture",
            size.x,
            size.y,
            diffuse.width(),
            diffuse.height()
        );
        let mut transform = NodeTransform::at(self.config.default_position);
        transform.scale = clamp_scale(DEFAULT_NODE_SCALE, &self.config.gesture);
        if transform.scale != DEFAULT_NODE_SCALE {
            log::debug!(
                "[plane] initial scale clamped to {} by bounds [{}, {}]",
                transform.scale,
                self.config.gesture.min_scale,
                self.config.gesture.max_scale
            );
        }
        PlaneNode::new(PlaneGeometry::new(size, Material { diffuse }), transform)
    }
}
