//! Slot-indexed pool of shape proxies
//!
//! Slot `k` belongs to the `k`-th shape in body-major order of the most recent
//! snapshot. Each pass walks that order once: an existing proxy is reused with
//! the geometry and scale it was built with, empty slots get a new proxy, and
//! everything past the last shape is dropped from the scene.

use super::outline::OutlineTable;
use super::proxy::Proxy;
use super::scene::Scene;
use crate::sim::{Body, Shape};

/// Observer invoked with a body, one of its proxies and the matching shape
pub type ProxyObserver = Box<dyn FnMut(&Body, &Proxy, &Shape)>;

/// Hooks fired during a pass: `on_init` for fresh proxies, `on_update` for reused ones
#[derive(Default)]
pub struct DebugCallbacks {
    pub on_init: Option<ProxyObserver>,
    pub on_update: Option<ProxyObserver>,
}

impl std::fmt::Debug for DebugCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugCallbacks")
            .field("on_init", &self.on_init.is_some())
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

/// Counts from one reconciliation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Shapes walked (equals the pool length afterwards)
    pub slots: usize,
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
    /// Slots left without a proxy because the shape had nothing to draw
    pub holes: usize,
}

#[derive(Debug, Default)]
pub struct MeshPool {
    slots: Vec<Option<Proxy>>,
}

impl MeshPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots, holes included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Proxy> {
        self.slots.get(slot)?.as_ref()
    }

    /// Live proxies with their slot index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Proxy)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (i, p)))
    }

    /// Reconcile the pool with `bodies`, mutating `scene` to match
    pub fn update<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        table: &OutlineTable,
        scale: f32,
        bodies: &[Body],
        callbacks: &mut DebugCallbacks,
    ) -> SyncReport {
        let normal = table.normal();
        let mut report = SyncReport::default();
        let mut slot = 0;

        for body in bodies {
            let rotation = body.quaternion(normal);
            for shape in &body.shapes {
                let created = self.sync_slot(scene, table, scale, slot, shape);
                match self.slots[slot].as_mut() {
                    Some(proxy) => {
                        proxy.transform.position = normal.lift(body.shape_world_position(shape));
                        proxy.transform.rotation = rotation;
                        scene.set_transform(proxy.mesh, &proxy.transform);

                        let observer = if created {
                            report.created += 1;
                            &mut callbacks.on_init
                        } else {
                            report.updated += 1;
                            &mut callbacks.on_update
                        };
                        if let Some(observer) = observer {
                            observer(body, &*proxy, shape);
                        }
                    }
                    None => report.holes += 1,
                }
                slot += 1;
            }
        }

        for proxy in self.slots.drain(slot..).flatten() {
            scene.remove_mesh(proxy.mesh);
            report.removed += 1;
        }
        report.slots = slot;

        if report.created > 0 || report.removed > 0 {
            log::debug!(
                "Proxy pass: {} slots, {} created, {} updated, {} removed, {} holes",
                report.slots,
                report.created,
                report.updated,
                report.removed,
                report.holes
            );
        } else {
            log::trace!(
                "Proxy pass: {} slots updated, {} holes",
                report.updated,
                report.holes
            );
        }
        report
    }

    /// Make slot `slot` host `shape`; true if a new proxy was built
    fn sync_slot<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        table: &OutlineTable,
        scale: f32,
        slot: usize,
        shape: &Shape,
    ) -> bool {
        if slot == self.slots.len() {
            self.slots.push(None);
        }

        if let Some(proxy) = self.slots[slot].as_mut() {
            if proxy.hosts(&shape.kind) {
                return false;
            }
        }

        if let Some(old) = self.slots[slot].take() {
            scene.remove_mesh(old.mesh);
        }
        self.slots[slot] = table.for_shape(&shape.kind).map(|geometry| {
            let mesh = scene.add_mesh(&geometry);
            Proxy::new(mesh, geometry, &shape.kind, scale)
        });
        self.slots[slot].is_some()
    }

    /// Drop every proxy from the scene and empty the pool
    pub fn clear<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        for proxy in self.slots.drain(..).flatten() {
            scene.remove_mesh(proxy.mesh);
        }
    }
}
