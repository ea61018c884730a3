//! Debug renderer
//!
//! Mirrors worker snapshots as outline meshes in a host scene. Geometry comes
//! from `OutlineTable`, proxies live in a slot-indexed `MeshPool`, and the
//! host only sees the narrow `Scene` trait.

pub mod debugger;
pub mod outline;
pub mod pool;
pub mod proxy;
pub mod scene;
pub mod vertex;

pub use debugger::Debugger;
pub use outline::{Outline, OutlineTable};
pub use pool::{DebugCallbacks, MeshPool, ProxyObserver, SyncReport};
pub use proxy::{Proxy, ProxyKind};
pub use scene::{MemoryScene, MeshId, Scene, SceneMesh, Transform};
pub use vertex::LineVertex;
