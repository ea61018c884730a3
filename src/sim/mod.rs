//! Authoritative simulation data model
//!
//! Owned exclusively by the worker context:
//! - Bodies and their attached shapes
//! - Material and contact-material registries
//! - The explicit `State` passed to protocol handlers

pub mod body;
pub mod contact_material;
pub mod material;
pub mod props;
pub mod shape;
pub mod state;
pub mod world;

pub use body::{Body, BodyType};
pub use contact_material::{ContactMaterial, ContactMaterialOptions};
pub use material::{CreateMaterial, Material, MaterialDescriptor, MaterialId, MaterialOptions, MaterialRegistry};
pub use props::{BodyProps, BodyShapeType, CompoundShape, ShapeArgs, props_to_body};
pub use shape::{Shape, ShapeKind, ShapeType};
pub use state::State;
pub use world::{BallisticIntegrator, Integrator, World};
