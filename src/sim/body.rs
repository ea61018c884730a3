//! Rigid bodies owned by the worker

use glam::{Quat, Vec2};
use serde::{Deserialize, Serialize};

use super::material::MaterialId;
use super::shape::Shape;
use crate::rotate;
use crate::settings::NormalAxis;

/// How the integrator treats a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyType {
    #[default]
    Dynamic,
    Static,
    Kinematic,
}

/// A simulated body with its attached shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Worker-local id (assigned on insertion)
    pub id: u32,
    /// Caller-issued identity, stable across the worker boundary
    pub uuid: String,
    pub body_type: BodyType,
    pub mass: f32,
    pub position: Vec2,
    /// Rotation in radians
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub material: Option<MaterialId>,
    /// Attached shapes, in attachment order
    pub shapes: Vec<Shape>,
}

impl Body {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            id: 0,
            uuid: uuid.into(),
            body_type: BodyType::Dynamic,
            mass: 1.0,
            position: Vec2::ZERO,
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            material: None,
            shapes: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// World-space position of an attached shape's origin
    pub fn shape_world_position(&self, shape: &Shape) -> Vec2 {
        self.position + rotate(shape.position, self.angle)
    }

    /// Body rotation as a quaternion about the render normal axis
    pub fn quaternion(&self, normal: NormalAxis) -> Quat {
        Quat::from_axis_angle(normal.unit(), self.angle)
    }

    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }
}
