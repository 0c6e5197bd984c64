//! Multi-touch finger painting.
//!
//! Fingers are tracked per pointer id, smoothed into quadratic curves, and
//! baked into a persistent raster surface when lifted. Each frame composites
//! that surface with every stroke still in progress.

pub mod config;
pub mod draw;
pub mod error;
pub mod gallery;
pub mod host;
pub mod logging;
pub mod pencil;
pub mod render;
pub mod router;
pub mod sketch;
pub mod stroke;
pub mod surface;
pub mod types;

pub use error::{Error, Result};
pub use pencil::Pencil;
pub use sketch::SketchView;
pub use surface::RasterSurface;
pub use types::{PointerId, PointerSample, TouchEvent};
