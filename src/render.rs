//! Per-frame compositing: baked surface first, live strokes on top.

use crate::pencil::Pencil;
use crate::router::TouchRouter;
use crate::surface::RasterSurface;
use crate::types::FrameBuffer;
use tiny_skia::{Color, Pixmap, PixmapPaint, Transform};

/// Draw the frame into `target`. Live strokes use the pencil as it is now,
/// so a mid-stroke color change is visible immediately. Target pixels
/// outside the surface stay white.
pub fn render_frame(surface: &RasterSurface, router: &TouchRouter, pencil: &Pencil, target: &mut Pixmap) {
    target.fill(Color::WHITE);
    target.draw_pixmap(
        0,
        0,
        surface.pixmap().as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    let paint = pencil.paint();
    let stroke = pencil.stroke();
    for session in router.live_sessions() {
        if let Some(path) = session.path.to_skia() {
            target.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

/// Convert a rendered pixmap into the window's 0x00RRGGBB layout.
/// The frame buffer must already have the pixmap's dimensions.
pub fn to_frame_buffer(pixmap: &Pixmap, fb: &mut FrameBuffer) {
    debug_assert_eq!(fb.width, pixmap.width() as usize);
    debug_assert_eq!(fb.height, pixmap.height() as usize);
    for (dst, px) in fb.pixels.iter_mut().zip(pixmap.pixels()) {
        let c = px.demultiply();
        *dst = ((c.red() as u32) << 16) | ((c.green() as u32) << 8) | c.blue() as u32;
    }
}
