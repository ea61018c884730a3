//! Render-side debugger: keeps one outline proxy per physics shape

use super::outline::OutlineTable;
use super::pool::{DebugCallbacks, MeshPool, SyncReport};
use super::proxy::Proxy;
use super::scene::Scene;
use crate::scheduler::FrameScheduler;
use crate::settings::DebugOptions;
use crate::sim::{Body, Shape};

pub struct Debugger<S: Scene> {
    scene: S,
    table: OutlineTable,
    pool: MeshPool,
    options: DebugOptions,
    callbacks: DebugCallbacks,
    scheduler: FrameScheduler,
}

impl<S: Scene> Debugger<S> {
    /// Build the outline table for `options.normal_index` and attach to `scene`
    pub fn new(scene: S, options: DebugOptions) -> Self {
        log::info!(
            "Debugger attached (normal {:?}, scale {}, auto update {})",
            options.normal_index,
            options.scale,
            options.auto_update
        );
        Self {
            scene,
            table: OutlineTable::new(options.normal_index),
            pool: MeshPool::new(),
            scheduler: FrameScheduler::new(options.auto_update),
            options,
            callbacks: DebugCallbacks::default(),
        }
    }

    /// Observe proxies the first time they are built
    pub fn on_init(mut self, observer: impl FnMut(&Body, &Proxy, &Shape) + 'static) -> Self {
        self.callbacks.on_init = Some(Box::new(observer));
        self
    }

    /// Observe proxies on every later pass
    pub fn on_update(mut self, observer: impl FnMut(&Body, &Proxy, &Shape) + 'static) -> Self {
        self.callbacks.on_update = Some(Box::new(observer));
        self
    }

    /// Run one proxy pass against `bodies` now
    pub fn update(&mut self, bodies: &[Body]) -> SyncReport {
        self.pool.update(
            &mut self.scene,
            &self.table,
            self.options.scale,
            bodies,
            &mut self.callbacks,
        )
    }

    /// Refresh tick from the host; runs a pass only while auto-update is on
    pub fn frame(&mut self, bodies: &[Body]) -> Option<SyncReport> {
        if self.scheduler.on_frame() {
            Some(self.update(bodies))
        } else {
            None
        }
    }

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn pool(&self) -> &MeshPool {
        &self.pool
    }

    pub fn table(&self) -> &OutlineTable {
        &self.table
    }

    pub fn options(&self) -> &DebugOptions {
        &self.options
    }

    /// Remove every proxy from the scene
    pub fn clear(&mut self) {
        self.pool.clear(&mut self.scene);
    }
}
