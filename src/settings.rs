//! Debug visualization options
//!
//! Persisted in LocalStorage on web, defaults on native.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COLOR;
use crate::error::{BridgeError, Result};

/// Render-space axis treated as "out of plane" when lifting 2D shapes into 3D
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NormalAxis {
    #[default]
    X,
    Y,
    Z,
}

impl NormalAxis {
    pub fn index(self) -> usize {
        match self {
            NormalAxis::X => 0,
            NormalAxis::Y => 1,
            NormalAxis::Z => 2,
        }
    }

    /// Unit vector along the normal axis (rotation axis for body angles)
    pub fn unit(self) -> Vec3 {
        match self {
            NormalAxis::X => Vec3::X,
            NormalAxis::Y => Vec3::Y,
            NormalAxis::Z => Vec3::Z,
        }
    }

    /// Insert a zero at this axis, keeping the planar coordinates in order
    #[inline]
    pub fn lift(self, v: Vec2) -> Vec3 {
        match self {
            NormalAxis::X => Vec3::new(0.0, v.x, v.y),
            NormalAxis::Y => Vec3::new(v.x, 0.0, v.y),
            NormalAxis::Z => Vec3::new(v.x, v.y, 0.0),
        }
    }
}

impl TryFrom<u8> for NormalAxis {
    type Error = BridgeError;

    fn try_from(index: u8) -> Result<Self> {
        match index {
            0 => Ok(NormalAxis::X),
            1 => Ok(NormalAxis::Y),
            2 => Ok(NormalAxis::Z),
            other => Err(BridgeError::InvalidNormalIndex(other)),
        }
    }
}

impl From<NormalAxis> for u8 {
    fn from(axis: NormalAxis) -> u8 {
        axis.index() as u8
    }
}

/// Debug renderer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebugOptions {
    /// Which render axis is "up" out of the simulation plane
    pub normal_index: NormalAxis,
    /// Outline color as 0xRRGGBB
    pub color: u32,
    /// Uniform scale applied to circle, line and plane outlines
    pub scale: f32,
    /// Start the frame scheduler running
    pub auto_update: bool,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            normal_index: NormalAxis::X,
            color: DEFAULT_COLOR,
            scale: 1.0,
            auto_update: true,
        }
    }
}

impl DebugOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Outline color as linear RGBA
    pub fn rgba(&self) -> [f32; 4] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0), 1.0]
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "planar_bridge_debug";

    /// Load options from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(options) => {
                        log::info!("Loaded debug options from LocalStorage");
                        return options;
                    }
                    Err(e) => log::warn!("Ignoring stored debug options: {}", e),
                }
            }
        }

        log::info!("Using default debug options");
        Self::default()
    }

    /// Save options to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Debug options saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
