//! Seam to the host scene graph
//!
//! The proxy pool only ever adds meshes, removes them, and sets their
//! transforms. Cameras, materials and drawing belong to the host.

use std::collections::BTreeMap;
use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use super::outline::Outline;
use super::vertex::LineVertex;

/// Host-side handle for a mesh added to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeshId(pub u64);

/// Position, rotation and scale of a proxy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Map an outline point into world space
    #[inline]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * point)
    }
}

/// Scene graph operations the proxy pool relies on
pub trait Scene {
    /// Add a line mesh drawing `geometry`; the scene may keep the `Arc`
    fn add_mesh(&mut self, geometry: &Arc<Outline>) -> MeshId;
    fn remove_mesh(&mut self, mesh: MeshId);
    fn set_transform(&mut self, mesh: MeshId, transform: &Transform);
}

/// A mesh held by `MemoryScene`
#[derive(Debug, Clone)]
pub struct SceneMesh {
    pub geometry: Arc<Outline>,
    pub transform: Transform,
}

/// In-memory scene: keeps meshes in a map and can flatten them to line vertices
///
/// Useful headless (tests, native demo) and as the staging buffer for a host
/// that uploads one line list per frame.
#[derive(Debug, Default)]
pub struct MemoryScene {
    meshes: BTreeMap<MeshId, SceneMesh>,
    next_id: u64,
    added: u64,
    removed: u64,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn get(&self, mesh: MeshId) -> Option<&SceneMesh> {
        self.meshes.get(&mesh)
    }

    pub fn contains(&self, mesh: MeshId) -> bool {
        self.meshes.contains_key(&mesh)
    }

    /// Meshes added over the scene's lifetime
    pub fn added(&self) -> u64 {
        self.added
    }

    /// Meshes removed over the scene's lifetime
    pub fn removed(&self) -> u64 {
        self.removed
    }

    /// All meshes as a world-space line list (two vertices per segment)
    pub fn line_vertices(&self, color: [f32; 4]) -> Vec<LineVertex> {
        let mut vertices = Vec::new();
        for mesh in self.meshes.values() {
            for pair in mesh.geometry.points().windows(2) {
                vertices.push(LineVertex::new(mesh.transform.apply(pair[0]), color));
                vertices.push(LineVertex::new(mesh.transform.apply(pair[1]), color));
            }
        }
        vertices
    }
}

impl Scene for MemoryScene {
    fn add_mesh(&mut self, geometry: &Arc<Outline>) -> MeshId {
        let id = MeshId(self.next_id);
        self.next_id += 1;
        self.added += 1;
        self.meshes.insert(
            id,
            SceneMesh {
                geometry: Arc::clone(geometry),
                transform: Transform::default(),
            },
        );
        id
    }

    fn remove_mesh(&mut self, mesh: MeshId) {
        if self.meshes.remove(&mesh).is_some() {
            self.removed += 1;
        }
    }

    fn set_transform(&mut self, mesh: MeshId, transform: &Transform) {
        if let Some(entry) = self.meshes.get_mut(&mesh) {
            entry.transform = *transform;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::OutlineTable;
    use crate::settings::NormalAxis;

    #[test]
    fn test_add_remove_counts() {
        let table = OutlineTable::new(NormalAxis::Z);
        let mut scene = MemoryScene::new();
        let a = scene.add_mesh(table.line());
        let b = scene.add_mesh(table.circle());
        assert_ne!(a, b);
        scene.remove_mesh(a);
        scene.remove_mesh(a);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.added(), 2);
        assert_eq!(scene.removed(), 1);
        assert!(scene.contains(b));
    }

    #[test]
    fn test_line_vertices_apply_transform() {
        let table = OutlineTable::new(NormalAxis::Z);
        let mut scene = MemoryScene::new();
        let mesh = scene.add_mesh(table.line());
        scene.set_transform(
            mesh,
            &Transform {
                position: Vec3::new(1.0, 1.0, 0.0),
                rotation: Quat::IDENTITY,
                scale: Vec3::splat(4.0),
            },
        );
        let vertices = scene.line_vertices([1.0; 4]);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [-1.0, 1.0, 0.0]);
        assert_eq!(vertices[1].position, [3.0, 1.0, 0.0]);
    }
}
