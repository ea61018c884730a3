//! Simulation world: body and contact-material registries
//!
//! The integrator itself (collision detection, constraint solving) is supplied
//! from outside through the `Integrator` trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::contact_material::ContactMaterial;
use crate::consts::GRAVITY;

/// Advances a world by one timestep
pub trait Integrator {
    fn integrate(&mut self, world: &mut World, dt: f32);
}

/// Collision-free integrator: gravity and velocities only
///
/// Enough to animate a debug view without a full physics engine behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BallisticIntegrator;

impl Integrator for BallisticIntegrator {
    fn integrate(&mut self, world: &mut World, dt: f32) {
        let gravity = world.gravity;
        for body in world.bodies.iter_mut() {
            if body.is_dynamic() {
                body.velocity += gravity * dt;
            }
            if body.is_dynamic() || body.body_type == super::BodyType::Kinematic {
                body.position += body.velocity * dt;
                body.angle += body.angular_velocity * dt;
            }
        }
    }
}

/// Authoritative simulation registries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Live bodies in insertion order
    pub bodies: Vec<Body>,
    /// Registered contact materials in insertion order
    pub contact_materials: Vec<ContactMaterial>,
    pub gravity: Vec2,
    /// Elapsed simulation time (seconds)
    pub time: f32,
    next_body_id: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            contact_materials: Vec::new(),
            gravity: Vec2::from(GRAVITY),
            time: 0.0,
            next_body_id: 1,
        }
    }

    /// Insert a body, assigning it a fresh id
    pub fn add_body(&mut self, mut body: Body) -> u32 {
        body.id = self.next_body_id;
        self.next_body_id += 1;
        let id = body.id;
        self.bodies.push(body);
        id
    }

    pub fn body(&self, uuid: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.uuid == uuid)
    }

    pub fn body_mut(&mut self, uuid: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.uuid == uuid)
    }

    /// Total shapes across all bodies (proxy count after a sync pass)
    pub fn shape_count(&self) -> usize {
        self.bodies.iter().map(|b| b.shapes.len()).sum()
    }

    pub fn add_contact_material(&mut self, contact_material: ContactMaterial) {
        self.contact_materials.push(contact_material);
    }

    pub fn contact_material(&self, uuid: &str) -> Option<&ContactMaterial> {
        self.contact_materials.iter().find(|cm| cm.uuid == uuid)
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, integrator: &mut impl Integrator, dt: f32) {
        integrator.integrate(self, dt);
        self.time += dt;
    }
}
