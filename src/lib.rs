//! Planar Bridge - 2D physics worker protocol with a debug outline renderer
//!
//! Core modules:
//! - `sim`: Authoritative simulation state owned by the worker (bodies, shapes, materials)
//! - `protocol`: UUID-correlated mutation messages and the handlers that apply them
//! - `worker`: Worker context that owns the state and talks over channels
//! - `renderer`: Outline table, proxy pool and the scene seam
//! - `scheduler`: Per-frame switch that drives the proxy pool
//! - `platform`: Host frame drivers (native interval loop, browser animation frames)
//! - `settings`: Debug visualization options

pub mod error;
pub mod platform;
pub mod protocol;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod worker;

pub use error::{BridgeError, Result};
pub use renderer::{Debugger, MemoryScene, Scene};
pub use settings::{DebugOptions, NormalAxis};
pub use worker::{Worker, WorkerHandle};

use glam::Vec2;

/// Shared constants
pub mod consts {
    /// Samples around a full circle outline
    pub const CIRCLE_PRECISION: usize = 24;
    /// Samples around the particle marker (hexagon)
    pub const PARTICLE_PRECISION: usize = 6;
    /// Particle marker radius (particles have no extent of their own)
    pub const PARTICLE_RADIUS: f32 = 0.05;
    /// Box corners are sampled from the circle equation at this radius (half-diagonal of a unit square)
    pub const BOX_CORNER_RADIUS: f32 = 0.7071;
    /// Planes are infinite; draw them this long
    pub const PLANE_EXTENT: f32 = 100.0;

    /// Default worker step (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Default world gravity
    pub const GRAVITY: [f32; 2] = [0.0, -9.78];

    /// Default outline color
    pub const DEFAULT_COLOR: u32 = 0xffffff;
}

/// Rotate a planar vector by `angle` radians (counter-clockwise)
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
