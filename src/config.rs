use std::path::Path;

use crate::engine::state::{DEFAULT_SIDE_LENGTH, DEFAULT_STEP_DELAY_MS};
use crate::foundation::error::{CrosstileError, CrosstileResult};

/// Surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

/// Startup parameters for an engine and its surface.
///
/// Every field is optional in JSON; missing ones take the defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Surface to draw on.
    pub surface: SurfaceSize,
    /// Side length of each square.
    pub side_length: f64,
    /// Delay between steps, in milliseconds.
    pub step_delay_ms: f64,
    /// Color seed. `None` draws colors from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            side_length: DEFAULT_SIDE_LENGTH,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> CrosstileResult<Self> {
        serde_json::from_str(json).map_err(|e| CrosstileError::serde(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn from_json_path(path: impl AsRef<Path>) -> CrosstileResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CrosstileError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Check that the surface can be rasterized.
    ///
    /// Side length and step delay are not checked: degenerate values give degenerate output.
    pub fn validate(&self) -> CrosstileResult<()> {
        let SurfaceSize { width, height } = self.surface;
        if width == 0 || height == 0 {
            return Err(CrosstileError::validation(format!(
                "surface must be at least 1x1, got {width}x{height}"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(CrosstileError::validation(format!(
                "surface must be at most 65535x65535, got {width}x{height}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
