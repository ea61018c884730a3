//! Visual proxies standing in for physics shapes

use std::sync::Arc;

use glam::Vec3;

use super::outline::Outline;
use super::scene::{MeshId, Transform};
use crate::consts::PLANE_EXTENT;
use crate::sim::{ShapeKind, ShapeType};

/// How a proxy is drawn by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyKind {
    /// Fat-line outline
    Line,
}

impl ProxyKind {
    /// Render kind used for a shape type (every shape is outlined today)
    pub fn for_shape(shape: ShapeType) -> Self {
        match shape {
            ShapeType::Box
            | ShapeType::Circle
            | ShapeType::Capsule
            | ShapeType::Convex
            | ShapeType::Heightfield
            | ShapeType::Line
            | ShapeType::Particle
            | ShapeType::Plane => ProxyKind::Line,
        }
    }
}

/// Mesh scale fixed when a proxy is created for `kind`
///
/// Capsules, hulls, heightfields and particles bake their size into the
/// outline and keep unit scale. Boxes are not affected by the debug scale.
pub fn creation_scale(kind: &ShapeKind, scale: f32) -> Vec3 {
    match kind {
        ShapeKind::Box { width, height } => Vec3::new(*width, *height, *height),
        ShapeKind::Circle { radius } => Vec3::splat(radius * scale),
        ShapeKind::Line { length } => Vec3::splat(length * scale),
        ShapeKind::Plane => Vec3::splat(PLANE_EXTENT * scale),
        ShapeKind::Capsule { .. }
        | ShapeKind::Convex { .. }
        | ShapeKind::Heightfield { .. }
        | ShapeKind::Particle => Vec3::ONE,
    }
}

/// A render-side stand-in for one shape
#[derive(Debug, Clone)]
pub struct Proxy {
    /// Scene handle
    pub mesh: MeshId,
    pub kind: ProxyKind,
    /// Shape parameters the proxy was built for
    pub shape: ShapeKind,
    pub geometry: Arc<Outline>,
    pub transform: Transform,
}

impl Proxy {
    pub fn new(mesh: MeshId, geometry: Arc<Outline>, shape: &ShapeKind, scale: f32) -> Self {
        Self {
            mesh,
            kind: ProxyKind::for_shape(shape.shape_type()),
            shape: shape.clone(),
            geometry,
            transform: Transform {
                scale: creation_scale(shape, scale),
                ..Transform::default()
            },
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Whether this proxy can keep standing in for `kind` without a new mesh
    ///
    /// Only the render kind matters. Geometry and scale stay as built, so a slot
    /// that shifts onto a different shape keeps its mesh.
    pub fn hosts(&self, kind: &ShapeKind) -> bool {
        self.kind == ProxyKind::for_shape(kind.shape_type())
    }

    /// Outline points in world space
    pub fn world_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.geometry
            .points()
            .iter()
            .map(move |&p| self.transform.apply(p))
    }
}
