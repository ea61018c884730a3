//! Contact materials: interaction rules between two materials

use serde::{Deserialize, Serialize};

use super::material::MaterialId;

/// Interaction parameters for a material pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMaterialOptions {
    pub friction: f32,
    pub restitution: f32,
    /// Contact equation stiffness
    pub stiffness: f32,
    /// Contact equation relaxation (steps)
    pub relaxation: f32,
    pub friction_stiffness: f32,
    pub friction_relaxation: f32,
    /// Conveyor-belt style tangential velocity
    pub surface_velocity: f32,
}

impl Default for ContactMaterialOptions {
    fn default() -> Self {
        Self {
            friction: 0.3,
            restitution: 0.0,
            stiffness: 1e6,
            relaxation: 4.0,
            friction_stiffness: 1e6,
            friction_relaxation: 4.0,
            surface_velocity: 0.0,
        }
    }
}

/// A registered contact material, identified by the caller's UUID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMaterial {
    pub uuid: String,
    pub materials: (MaterialId, MaterialId),
    pub options: ContactMaterialOptions,
}

impl ContactMaterial {
    pub fn new(
        uuid: impl Into<String>,
        material_a: MaterialId,
        material_b: MaterialId,
        options: ContactMaterialOptions,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            materials: (material_a, material_b),
            options,
        }
    }

    /// True if this rule covers the pair, in either order
    pub fn involves(&self, a: MaterialId, b: MaterialId) -> bool {
        let (x, y) = self.materials;
        (x == a && y == b) || (x == b && y == a)
    }
}
