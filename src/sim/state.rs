//! Worker-owned simulation state
//!
//! Passed explicitly to every protocol handler; nothing here is global.

use super::body::Body;
use super::world::{Integrator, World};

/// Everything the worker owns besides its material table
#[derive(Debug, Clone, Default)]
pub struct State {
    pub world: World,
    /// Completed simulation steps
    pub tick: u64,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the world one step
    pub fn step(&mut self, integrator: &mut impl Integrator, dt: f32) {
        self.world.step(integrator, dt);
        self.tick += 1;
    }

    /// Copy of the body list for publishing to the render side
    pub fn snapshot(&self) -> Vec<Body> {
        self.world.bodies.clone()
    }
}
