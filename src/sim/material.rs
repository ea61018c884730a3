//! Surface materials and the factory that resolves descriptors to them
//!
//! Materials are opaque to the bridge beyond identity: the integrator reads
//! friction/restitution, the protocol only needs a stable id per name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type MaterialId = u32;

/// Material options as sent by the render side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOptions {
    pub name: Option<String>,
    pub friction: Option<f32>,
    pub restitution: Option<f32>,
}

/// Either a bare material name or a full options record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialDescriptor {
    Name(String),
    Options(MaterialOptions),
}

impl MaterialDescriptor {
    pub fn name(&self) -> Option<&str> {
        match self {
            MaterialDescriptor::Name(name) => Some(name),
            MaterialDescriptor::Options(options) => options.name.as_deref(),
        }
    }
}

/// A registered surface material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: Option<String>,
    pub friction: Option<f32>,
    pub restitution: Option<f32>,
}

/// Capability that turns a descriptor into a live material id
///
/// Handlers receive this instead of the registry so tests (and hosts with their
/// own material tables) can plug in a closure.
pub trait CreateMaterial {
    fn create_material(&mut self, descriptor: Option<&MaterialDescriptor>) -> MaterialId;
}

impl<F> CreateMaterial for F
where
    F: FnMut(Option<&MaterialDescriptor>) -> MaterialId,
{
    fn create_material(&mut self, descriptor: Option<&MaterialDescriptor>) -> MaterialId {
        self(descriptor)
    }
}

/// Name-keyed material table
///
/// A name resolves to the same material for the lifetime of the registry.
/// Missing and unnamed descriptors all resolve to one shared default material;
/// the options of the first unnamed descriptor win.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
    by_name: HashMap<String, MaterialId>,
    default: Option<MaterialId>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Material> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    fn insert(&mut self, name: Option<String>, options: Option<&MaterialOptions>) -> MaterialId {
        let id = self.materials.len() as MaterialId;
        self.materials.push(Material {
            id,
            name,
            friction: options.and_then(|o| o.friction),
            restitution: options.and_then(|o| o.restitution),
        });
        id
    }
}

impl CreateMaterial for MaterialRegistry {
    fn create_material(&mut self, descriptor: Option<&MaterialDescriptor>) -> MaterialId {
        let options = match descriptor {
            Some(MaterialDescriptor::Options(options)) => Some(options),
            _ => None,
        };

        match descriptor.and_then(MaterialDescriptor::name) {
            Some(name) => {
                if let Some(&id) = self.by_name.get(name) {
                    return id;
                }
                let id = self.insert(Some(name.to_string()), options);
                self.by_name.insert(name.to_string(), id);
                log::debug!("Created material {} ({})", id, name);
                id
            }
            None => {
                if let Some(id) = self.default {
                    return id;
                }
                let id = self.insert(None, options);
                self.default = Some(id);
                log::debug!("Created default material {}", id);
                id
            }
        }
    }
}
