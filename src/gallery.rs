// Saves the baked drawing as a JPEG in the gallery directory.
// Only finished strokes are saved; anything still under a finger is not.

use crate::error::{Error, Result};
use crate::surface::RasterSurface;
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// "eSketch" + milliseconds since the epoch + ".jpg".
pub fn gallery_file_name(millis: u128) -> String {
    format!("eSketch{millis}.jpg")
}

/// Write the surface to `dir`, creating the directory if needed.
/// Returns the full path of the new file.
pub fn save_to_gallery(surface: &RasterSurface, dir: &Path) -> Result<PathBuf> {
    // 1) Make sure the gallery exists (first save on a fresh machine).
    std::fs::create_dir_all(dir).map_err(|e| Error::Save(format!("{}: {e}", dir.display())))?;

    // 2) Timestamped file name, like a camera roll.
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Save(e.to_string()))?
        .as_millis();
    let path = dir.join(gallery_file_name(millis));

    // 3) JPEG has no alpha: drop it after un-premultiplying.
    let image = to_rgb_image(surface)?;
    image
        .save_with_format(&path, ImageFormat::Jpeg)
        .map_err(|e| Error::Save(format!("{}: {e}", path.display())))?;

    log::info!("drawing saved to {}", path.display());
    Ok(path)
}

fn to_rgb_image(surface: &RasterSurface) -> Result<RgbImage> {
    let pixmap = surface.pixmap();
    let mut rgb = Vec::with_capacity(pixmap.pixels().len() * 3);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }
    RgbImage::from_raw(surface.width(), surface.height(), rgb)
        .ok_or_else(|| Error::Save("pixel buffer size mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_timestamped() {
        assert_eq!(gallery_file_name(1_700_000_000_123), "eSketch1700000000123.jpg");
    }

    #[test]
    fn save_creates_directory_and_decodable_jpeg() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Pictures").join("eSketch");
        let surface = RasterSurface::new(32, 24).unwrap();

        let path = save_to_gallery(&surface, &dir).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("eSketch") && name.ends_with(".jpg"));

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (32, 24));
        assert!(decoded.pixels().all(|p| p.0.iter().all(|&c| c > 240)));
    }

    #[test]
    fn unwritable_directory_is_a_save_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let surface = RasterSurface::new(4, 4).unwrap();
        assert!(matches!(save_to_gallery(&surface, &blocker.join("sub")), Err(Error::Save(_))));
    }
}
