//! Platform abstraction layer
//!
//! Host frame drivers:
//! - `native`: fixed-interval loop on the calling thread
//! - `web`: browser `requestAnimationFrame` loop

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;
