//! Body construction from render-side props
//!
//! The render side describes bodies as plain data (`BodyProps`) plus a batch-wide
//! shape type; this module turns one props record into a live `Body`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyType};
use super::material::{CreateMaterial, MaterialDescriptor};
use super::shape::{Shape, ShapeKind, ShapeType};
use crate::error::{BridgeError, Result};

/// Default heightfield sample spacing
pub const DEFAULT_ELEMENT_WIDTH: f32 = 0.1;

/// Shape type of an `addBodies` batch; `Compound` bodies list their shapes in props
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyShapeType {
    Box,
    Circle,
    Capsule,
    Convex,
    Heightfield,
    Line,
    Particle,
    Plane,
    Compound,
}

impl BodyShapeType {
    /// Single-shape type, or `None` for compound bodies
    pub fn single(self) -> Option<ShapeType> {
        match self {
            BodyShapeType::Box => Some(ShapeType::Box),
            BodyShapeType::Circle => Some(ShapeType::Circle),
            BodyShapeType::Capsule => Some(ShapeType::Capsule),
            BodyShapeType::Convex => Some(ShapeType::Convex),
            BodyShapeType::Heightfield => Some(ShapeType::Heightfield),
            BodyShapeType::Line => Some(ShapeType::Line),
            BodyShapeType::Particle => Some(ShapeType::Particle),
            BodyShapeType::Plane => Some(ShapeType::Plane),
            BodyShapeType::Compound => None,
        }
    }
}

/// Loose shape arguments; which fields matter depends on the shape type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeArgs {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub radius: Option<f32>,
    pub length: Option<f32>,
    pub vertices: Option<Vec<Vec2>>,
    pub heights: Option<Vec<f32>>,
    pub element_width: Option<f32>,
}

impl ShapeArgs {
    /// Build a shape kind, falling back to unit dimensions where the engine does
    pub fn build(&self, shape: ShapeType) -> Result<ShapeKind> {
        let kind = match shape {
            ShapeType::Box => ShapeKind::Box {
                width: self.width.unwrap_or(1.0),
                height: self.height.unwrap_or(1.0),
            },
            ShapeType::Circle => ShapeKind::Circle {
                radius: self.radius.unwrap_or(1.0),
            },
            ShapeType::Capsule => ShapeKind::Capsule {
                length: self.length.unwrap_or(1.0),
                radius: self.radius.unwrap_or(1.0),
            },
            ShapeType::Convex => match &self.vertices {
                Some(vertices) if !vertices.is_empty() => ShapeKind::Convex {
                    vertices: vertices.clone(),
                },
                _ => return Err(BridgeError::MissingShapeArg { shape, arg: "vertices" }),
            },
            ShapeType::Heightfield => match &self.heights {
                Some(heights) if !heights.is_empty() => ShapeKind::Heightfield {
                    heights: heights.clone(),
                    element_width: self.element_width.unwrap_or(DEFAULT_ELEMENT_WIDTH),
                },
                _ => return Err(BridgeError::MissingShapeArg { shape, arg: "heights" }),
            },
            ShapeType::Line => ShapeKind::Line {
                length: self.length.unwrap_or(1.0),
            },
            ShapeType::Particle => ShapeKind::Particle,
            ShapeType::Plane => ShapeKind::Plane,
        };
        Ok(kind)
    }
}

/// One shape of a compound body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundShape {
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub angle: f32,
    #[serde(default)]
    pub args: ShapeArgs,
}

/// Body description sent with `addBodies`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyProps {
    pub position: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    /// Zero mass makes a static body unless `body_type` says otherwise
    pub mass: f32,
    pub body_type: Option<BodyType>,
    pub material: Option<MaterialDescriptor>,
    /// Arguments for single-shape bodies
    pub args: ShapeArgs,
    /// Shapes of a `Compound` body
    pub shapes: Vec<CompoundShape>,
}

/// Build a body from props; the world assigns its id on insertion
pub fn props_to_body(
    create_material: &mut impl CreateMaterial,
    props: &BodyProps,
    shape_type: BodyShapeType,
    uuid: String,
) -> Result<Body> {
    let shapes = match shape_type.single() {
        Some(single) => vec![Shape::new(props.args.build(single)?)],
        None => props
            .shapes
            .iter()
            .map(|s| Ok(Shape::at(s.args.build(s.shape_type)?, s.position, s.angle)))
            .collect::<Result<Vec<_>>>()?,
    };

    let body_type = props.body_type.unwrap_or(if props.mass > 0.0 {
        BodyType::Dynamic
    } else {
        BodyType::Static
    });

    Ok(Body {
        id: 0,
        uuid,
        body_type,
        mass: props.mass,
        position: props.position,
        angle: props.angle,
        velocity: props.velocity,
        angular_velocity: props.angular_velocity,
        material: Some(create_material.create_material(props.material.as_ref())),
        shapes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MaterialRegistry;

    #[test]
    fn test_box_defaults() {
        let kind = ShapeArgs::default().build(ShapeType::Box).unwrap();
        assert_eq!(
            kind,
            ShapeKind::Box {
                width: 1.0,
                height: 1.0
            }
        );
    }

    #[test]
    fn test_convex_requires_vertices() {
        let err = ShapeArgs::default().build(ShapeType::Convex).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::MissingShapeArg {
                shape: ShapeType::Convex,
                arg: "vertices"
            }
        ));
    }

    #[test]
    fn test_mass_selects_body_type() {
        let mut materials = MaterialRegistry::new();
        let props = BodyProps {
            mass: 2.0,
            ..Default::default()
        };
        let body = props_to_body(&mut materials, &props, BodyShapeType::Circle, "c".into()).unwrap();
        assert_eq!(body.body_type, BodyType::Dynamic);

        let ground = props_to_body(
            &mut materials,
            &BodyProps::default(),
            BodyShapeType::Plane,
            "g".into(),
        )
        .unwrap();
        assert_eq!(ground.body_type, BodyType::Static);
        assert_eq!(ground.material, body.material);
    }

    #[test]
    fn test_compound_from_json() {
        let props: BodyProps = serde_json::from_str(
            r#"{
                "mass": 1,
                "shapes": [
                    {"type": "Box", "args": {"width": 2, "height": 1}},
                    {"type": "Circle", "position": [1, 0], "args": {"radius": 0.5}}
                ]
            }"#,
        )
        .unwrap();
        let mut materials = MaterialRegistry::new();
        let body = props_to_body(&mut materials, &props, BodyShapeType::Compound, "cmp".into()).unwrap();
        assert_eq!(body.shapes.len(), 2);
        assert_eq!(body.shapes[1].position, Vec2::new(1.0, 0.0));
        assert_eq!(body.shapes[1].kind, ShapeKind::Circle { radius: 0.5 });
    }
}
