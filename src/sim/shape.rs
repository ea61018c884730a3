//! Shape primitives attached to bodies
//!
//! A shape is a closed sum type: every consumer matches exhaustively, so a new
//! kind cannot be silently ignored by the outline table or the scaling policy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fieldless tag for a shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Box,
    Circle,
    Capsule,
    Convex,
    Heightfield,
    Line,
    Particle,
    Plane,
}

/// Kind-specific geometric parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ShapeKind {
    Box { width: f32, height: f32 },
    Circle { radius: f32 },
    /// Stadium along the local x axis; `length` is the distance between cap centers
    Capsule { length: f32, radius: f32 },
    /// Hull vertices in local coordinates, counter-clockwise
    Convex { vertices: Vec<Vec2> },
    /// Height samples spaced `element_width` apart along local x
    Heightfield { heights: Vec<f32>, element_width: f32 },
    Line { length: f32 },
    Particle,
    Plane,
}

impl ShapeKind {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Box { .. } => ShapeType::Box,
            ShapeKind::Circle { .. } => ShapeType::Circle,
            ShapeKind::Capsule { .. } => ShapeType::Capsule,
            ShapeKind::Convex { .. } => ShapeType::Convex,
            ShapeKind::Heightfield { .. } => ShapeType::Heightfield,
            ShapeKind::Line { .. } => ShapeType::Line,
            ShapeKind::Particle => ShapeType::Particle,
            ShapeKind::Plane => ShapeType::Plane,
        }
    }
}

/// A shape attached to a body at a local offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Offset from the owning body's origin, in body space
    pub position: Vec2,
    /// Rotation relative to the owning body (radians)
    pub angle: f32,
    pub kind: ShapeKind,
}

impl Shape {
    /// Shape centered on its body
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            kind,
        }
    }

    /// Shape at a local offset
    pub fn at(kind: ShapeKind, position: Vec2, angle: f32) -> Self {
        Self {
            position,
            angle,
            kind,
        }
    }

    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_type_tags() {
        assert_eq!(
            Shape::new(ShapeKind::Box {
                width: 1.0,
                height: 2.0
            })
            .shape_type(),
            ShapeType::Box
        );
        assert_eq!(Shape::new(ShapeKind::Plane).shape_type(), ShapeType::Plane);
        assert_eq!(
            ShapeKind::Heightfield {
                heights: vec![0.0],
                element_width: 1.0
            }
            .shape_type(),
            ShapeType::Heightfield
        );
    }

    #[test]
    fn test_kind_json_is_type_tagged() {
        let kind = ShapeKind::Capsule {
            length: 2.0,
            radius: 0.5,
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains(r#""type":"Capsule""#));
        let back: ShapeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}
