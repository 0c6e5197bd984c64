//! The sketch view: the one object the host talks to.
//!
//! Everything runs on the host's thread in arrival order. Input handling only
//! raises a redraw flag; the host decides when to call [`SketchView::render`],
//! which always reads the latest state.

use crate::error::Result;
use crate::pencil::Pencil;
use crate::render::render_frame;
use crate::router::TouchRouter;
use crate::surface::RasterSurface;
use crate::types::TouchEvent;
use tiny_skia::Pixmap;

pub struct SketchView {
    surface: RasterSurface,
    router: TouchRouter,
    pencil: Pencil,
    redraw_requested: bool,
}

impl SketchView {
    pub fn new(width: u32, height: u32, pencil: Pencil, tolerance: f32) -> Result<Self> {
        Ok(Self {
            surface: RasterSurface::new(width, height)?,
            router: TouchRouter::new(tolerance),
            pencil,
            redraw_requested: true,
        })
    }

    /// Feed one input event. Always reports the event as handled.
    pub fn handle_input_event(&mut self, event: &TouchEvent) -> bool {
        self.router.dispatch(event, &mut self.surface, &self.pencil);
        self.redraw_requested = true;
        true
    }

    /// Composite the surface and every live stroke into `target`.
    pub fn render(&self, target: &mut Pixmap) {
        render_frame(&self.surface, &self.router, &self.pencil, target);
    }

    /// Returns whether a redraw was requested since the last call, and lowers
    /// the flag. Several requests between calls collapse into one.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn set_color(&mut self, argb: u32) {
        self.pencil.set_color(argb);
        self.redraw_requested = true;
    }

    pub fn color(&self) -> u32 {
        self.pencil.color()
    }

    pub fn set_width(&mut self, width: f32) {
        self.pencil.set_width(width);
        self.redraw_requested = true;
    }

    pub fn width(&self) -> f32 {
        self.pencil.width()
    }

    /// Wipe the drawing and forget every finger.
    pub fn clear(&mut self) {
        self.router.clear();
        self.surface.clear();
        self.redraw_requested = true;
        log::info!("sketch cleared");
    }

    /// New blank surface at the new size. Finger sessions are kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.surface.resize(width, height)?;
        self.redraw_requested = true;
        Ok(())
    }

    /// Read-only view of the baked drawing, e.g. for saving.
    pub fn export_raster_surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn router(&self) -> &TouchRouter {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::router::TOUCH_TOLERANCE;
    use crate::surface::WHITE_ARGB;
    use crate::types::PointerSample;

    fn sketch() -> SketchView {
        SketchView::new(64, 64, Pencil::default(), TOUCH_TOLERANCE).unwrap()
    }

    #[test]
    fn every_event_is_handled_and_requests_redraw() {
        let mut view = sketch();
        assert!(view.take_redraw_request());
        assert!(!view.take_redraw_request());

        assert!(view.handle_input_event(&TouchEvent::Up { id: 42 }));
        assert!(view.handle_input_event(&TouchEvent::Move(Vec::new())));
        assert!(view.take_redraw_request());
        assert!(!view.take_redraw_request());
    }

    #[test]
    fn pencil_accessors_round_trip() {
        let mut view = sketch();
        view.set_color(0x7F12_3456);
        view.set_width(17.0);
        assert_eq!(view.color(), 0x7F12_3456);
        assert_eq!(view.width(), 17.0);
    }

    #[test]
    fn failed_resize_keeps_surface() {
        let mut view = sketch();
        view.set_width(6.0);
        view.handle_input_event(&TouchEvent::Down { id: 0, x: 5.0, y: 30.0 });
        view.handle_input_event(&TouchEvent::Move(vec![PointerSample { id: 0, x: 60.0, y: 30.0 }]));
        view.handle_input_event(&TouchEvent::Up { id: 0 });
        let drawn = view.export_raster_surface().pixel(20, 30);
        assert_ne!(drawn, Some(WHITE_ARGB));

        assert!(view.resize(0, 0).is_err());
        assert!(matches!(view.resize(u32::MAX, u32::MAX), Err(Error::ResourceExhausted { .. })));
        let surface = view.export_raster_surface();
        assert_eq!((surface.width(), surface.height()), (64, 64));
        assert_eq!(surface.pixel(20, 30), drawn);
    }
}
