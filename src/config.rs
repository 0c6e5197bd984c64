use crate::error::{Error, Result};
use crate::pencil::{DEFAULT_COLOR, DEFAULT_WIDTH};
use crate::router::TOUCH_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Initial window/surface width in pixels.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    /// Starting pencil color as 0xAARRGGBB.
    #[serde(default = "default_color")]
    pub color: u32,
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// Movement needed on either axis before a segment is recorded.
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance: f32,
    /// Directory saved drawings are written to. Created on first save.
    #[serde(default = "default_gallery_dir")]
    pub gallery_dir: PathBuf,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_color() -> u32 {
    DEFAULT_COLOR
}

fn default_line_width() -> f32 {
    DEFAULT_WIDTH
}

fn default_touch_tolerance() -> f32 {
    TOUCH_TOLERANCE
}

fn default_gallery_dir() -> PathBuf {
    PathBuf::from("gallery")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            color: default_color(),
            line_width: default_line_width(),
            touch_tolerance: default_touch_tolerance(),
            gallery_dir: default_gallery_dir(),
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("settings file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::Config(format!("{}: {e}", path.display()))),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }
}
