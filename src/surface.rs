//! Persistent raster surface that finished strokes are baked into.
//!
//! Only touch-ended strokes ever land here. Resizing throws the old pixels
//! away and starts over from opaque white.

use crate::error::{Error, Result};
use crate::pencil::Pencil;
use crate::stroke::StrokePath;
use tiny_skia::{Color, IntSize, Pixmap, Transform};

/// Opaque white as 0xAARRGGBB.
pub const WHITE_ARGB: u32 = 0xFFFF_FFFF;

pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    /// Allocate a blank (opaque white) surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut pixmap = allocate(width, height)?;
        pixmap.fill(Color::WHITE);
        Ok(Self { pixmap })
    }

    /// Replace the buffer with a fresh white one of the new size.
    /// On error the current buffer is left as it was.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let mut pixmap = allocate(width, height)?;
        pixmap.fill(Color::WHITE);
        self.pixmap = pixmap;
        log::info!("surface resized to {width}x{height}");
        Ok(())
    }

    /// Composite a finished path using the pencil as it is right now.
    /// Irreversible. Paths with no curves leave the buffer untouched.
    pub fn bake_path(&mut self, path: &StrokePath, pencil: &Pencil) {
        let Some(skia_path) = path.to_skia() else {
            return;
        };
        self.pixmap.stroke_path(
            &skia_path,
            &pencil.paint(),
            &pencil.stroke(),
            Transform::identity(),
            None,
        );
        log::debug!("baked {} segments at width {}", path.curve_count(), pencil.width());
    }

    /// Fill the whole buffer with opaque white.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::WHITE);
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Unpremultiplied 0xAARRGGBB at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        // Pixmap::pixel only checks the flat index, so rows would wrap.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(u32::from_be_bytes([c.alpha(), c.red(), c.green(), c.blue()]))
    }

    /// True when every pixel equals `argb`.
    pub fn is_uniform(&self, argb: u32) -> bool {
        let (w, h) = (self.width(), self.height());
        (0..h).all(|y| (0..w).all(|x| self.pixel(x, y) == Some(argb)))
    }

    /// Read-only access to the underlying premultiplied RGBA pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

// Reserve the bytes ourselves so an oversized request comes back as an
// error instead of aborting the process.
fn allocate(width: u32, height: u32) -> Result<Pixmap> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let exhausted = || Error::ResourceExhausted { width, height };
    let size = IntSize::from_wh(width, height).ok_or(Error::InvalidDimension { width, height })?;
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(exhausted)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| exhausted())?;
    data.resize(len, 0u8);
    Pixmap::from_vec(data, size).ok_or_else(exhausted)
}
