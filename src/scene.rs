//! Scene graph holding the single anchored plane node.

use crate::constants::DEFAULT_NODE_SCALE;
use crate::error::SceneError;
use crate::geometry::PlaneGeometry;
use glam::{Mat4, Quat, Vec3};

/// Pose of a node relative to the tracking origin. Scale is uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl NodeTransform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: DEFAULT_NODE_SCALE,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }
}

/// The 3D entity displaying the baked drawing.
///
/// Only the gesture engine mutates the transform; it keeps the scale inside
/// the configured bounds and the position finite.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneNode {
    geometry: PlaneGeometry,
    transform: NodeTransform,
}

impl PlaneNode {
    pub fn new(geometry: PlaneGeometry, transform: NodeTransform) -> Self {
        Self {
            geometry,
            transform,
        }
    }

    pub fn geometry(&self) -> &PlaneGeometry {
        &self.geometry
    }

    pub fn transform(&self) -> &NodeTransform {
        &self.transform
    }

    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub(crate) fn set_scale(&mut self, scale: f32) {
        self.transform.scale = scale;
    }

    pub(crate) fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }
}

/// Scene container. Accepts exactly one node for its lifetime.
#[derive(Debug, Default)]
pub struct Scene {
    node: Option<PlaneNode>,
    populated: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene that already holds its one node.
    pub fn with_node(node: PlaneNode) -> Self {
        Self {
            node: Some(node),
            populated: true,
        }
    }

    pub fn insert(&mut self, node: PlaneNode) -> Result<(), SceneError> {
        if self.populated {
            return Err(SceneError::AlreadyPopulated);
        }
        self.node = Some(node);
        self.populated = true;
        Ok(())
    }

    pub fn node(&self) -> Option<&PlaneNode> {
        self.node.as_ref()
    }

    pub fn node_mut(&mut self) -> Option<&mut PlaneNode> {
        self.node.as_mut()
    }

    /// Drops the node. The scene stays populated, so nothing can be
    /// re-inserted; a new view is needed for a new node.
    pub fn teardown(&mut self) -> Option<PlaneNode> {
        self.node.take()
    }
}
