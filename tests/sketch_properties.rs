use esketch::router::TOUCH_TOLERANCE;
use esketch::surface::WHITE_ARGB;
use esketch::types::Point;
use esketch::{Pencil, PointerSample, RasterSurface, SketchView, TouchEvent};
use tiny_skia::Pixmap;

fn new_sketch(w: u32, h: u32) -> SketchView {
    SketchView::new(w, h, Pencil::default(), TOUCH_TOLERANCE).unwrap()
}

fn down(view: &mut SketchView, id: i32, x: f32, y: f32) {
    assert!(view.handle_input_event(&TouchEvent::Down { id, x, y }));
}

fn move_to(view: &mut SketchView, samples: &[(i32, f32, f32)]) {
    let batch = samples.iter().map(|&(id, x, y)| PointerSample { id, x, y }).collect();
    assert!(view.handle_input_event(&TouchEvent::Move(batch)));
}

fn up(view: &mut SketchView, id: i32) {
    assert!(view.handle_input_event(&TouchEvent::Up { id }));
}

fn snapshot(surface: &RasterSurface) -> Vec<u32> {
    let mut px = Vec::new();
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            px.push(surface.pixel(x, y).unwrap());
        }
    }
    px
}

fn channels(argb: u32) -> (u8, u8, u8) {
    let [_, r, g, b] = argb.to_be_bytes();
    (r, g, b)
}

#[test]
fn baking_only_touches_pixels_near_the_path() {
    let mut view = new_sketch(120, 120);
    view.set_width(8.0);
    let before = snapshot(view.export_raster_surface());

    down(&mut view, 0, 20.0, 30.0);
    move_to(&mut view, &[(0, 60.0, 50.0)]);
    move_to(&mut view, &[(0, 90.0, 40.0)]);
    let bounds = view.router().session(0).unwrap().path.bounds().unwrap();
    up(&mut view, 0);

    let surface = view.export_raster_surface();
    let after = snapshot(surface);
    assert_ne!(before, after);

    // Half the width plus a pixel of anti-aliasing slack.
    let zone = bounds.outset(view.width() / 2.0 + 1.0);
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let i = (y * surface.width() + x) as usize;
            if before[i] != after[i] {
                assert!(zone.contains(x as f32 + 0.5, y as f32 + 0.5), "pixel ({x},{y}) changed outside the path");
            }
        }
    }
}

#[test]
fn repeated_position_does_not_grow_the_path() {
    let mut view = new_sketch(64, 64);
    down(&mut view, 0, 10.0, 10.0);
    move_to(&mut view, &[(0, 30.0, 10.0)]);
    let session = view.router().session(0).unwrap().clone();

    move_to(&mut view, &[(0, 30.0, 10.0)]);
    move_to(&mut view, &[(0, 33.0, 13.0)]);
    let after = view.router().session(0).unwrap();
    assert_eq!(after.path.curve_count(), 1);
    assert_eq!(after.last, session.last);
    assert_eq!(after, &session);
}

#[test]
fn clear_leaves_a_white_surface_and_no_live_paths() {
    let mut view = new_sketch(64, 64);
    down(&mut view, 0, 5.0, 5.0);
    move_to(&mut view, &[(0, 40.0, 40.0)]);
    up(&mut view, 0);
    down(&mut view, 1, 50.0, 10.0);
    move_to(&mut view, &[(1, 10.0, 50.0)]);

    view.clear();
    assert!(view.export_raster_surface().is_uniform(WHITE_ARGB));
    assert_eq!(view.router().live_sessions().count(), 0);
    assert_eq!(view.router().sessions().count(), 0);

    let mut target = Pixmap::new(64, 64).unwrap();
    view.render(&mut target);
    assert!(target.pixels().iter().all(|p| p.demultiply().red() == 255
        && p.demultiply().green() == 255
        && p.demultiply().blue() == 255));
}

#[test]
fn color_change_mid_stroke_bakes_final_color() {
    let mut view = new_sketch(80, 80);
    view.set_color(0xFFFF_0000);
    view.set_width(6.0);
    down(&mut view, 0, 10.0, 40.0);
    move_to(&mut view, &[(0, 70.0, 40.0)]);
    view.set_color(0xFF00_00FF);
    up(&mut view, 0);

    let (r, g, b) = channels(view.export_raster_surface().pixel(25, 40).unwrap());
    assert!(b > 200 && r < 60 && g < 60, "expected blue, got {r} {g} {b}");
}

#[test]
fn live_stroke_follows_pencil_at_render_time() {
    let mut view = new_sketch(80, 80);
    view.set_width(6.0);
    down(&mut view, 0, 10.0, 40.0);
    move_to(&mut view, &[(0, 70.0, 40.0)]);
    view.set_color(0xFF00_A000);

    let mut target = Pixmap::new(80, 80).unwrap();
    view.render(&mut target);
    let c = target.pixel(25, 40).unwrap().demultiply();
    assert!(c.green() > 120 && c.red() < 60 && c.blue() < 60);
    // Still not baked.
    assert!(view.export_raster_surface().is_uniform(WHITE_ARGB));
}

// Reused pointer ids take the new touch point as their baseline.
#[test]
fn reused_pointer_id_starts_from_new_touch_point() {
    let mut view = new_sketch(100, 100);
    down(&mut view, 7, 10.0, 10.0);
    up(&mut view, 7);
    down(&mut view, 7, 50.0, 50.0);

    let session = view.router().session(7).unwrap();
    assert_eq!(session.last, Point { x: 50, y: 50 });
    assert!(session.path.is_empty());
    assert_eq!(view.router().sessions().count(), 1);

    // The first move is measured from (50, 50): this one is jitter.
    move_to(&mut view, &[(7, 53.0, 52.0)]);
    assert!(view.router().session(7).unwrap().path.is_empty());
}

#[test]
fn concurrent_pointers_do_not_interfere() {
    let mut view = new_sketch(100, 100);
    view.set_width(4.0);
    down(&mut view, 1, 10.0, 20.0);
    down(&mut view, 2, 10.0, 80.0);
    move_to(&mut view, &[(1, 90.0, 20.0), (2, 90.0, 80.0)]);
    move_to(&mut view, &[(2, 95.0, 60.0)]);
    let second_before = view.router().session(2).unwrap().clone();

    up(&mut view, 1);
    assert_eq!(view.router().session(2).unwrap(), &second_before);
    assert_eq!(second_before.path.curve_count(), 2);

    let surface = view.export_raster_surface();
    assert_ne!(surface.pixel(30, 20), Some(WHITE_ARGB));
    assert_eq!(surface.pixel(30, 80), Some(WHITE_ARGB));
}

#[test]
fn resize_yields_blank_surface_of_new_size() {
    let mut view = new_sketch(100, 100);
    down(&mut view, 0, 10.0, 10.0);
    move_to(&mut view, &[(0, 90.0, 90.0)]);
    up(&mut view, 0);
    assert!(!view.export_raster_surface().is_uniform(WHITE_ARGB));

    view.resize(200, 200).unwrap();
    let surface = view.export_raster_surface();
    assert_eq!((surface.width(), surface.height()), (200, 200));
    assert!(surface.is_uniform(WHITE_ARGB));
}

#[test]
fn tap_without_movement_draws_nothing() {
    let mut view = new_sketch(40, 40);
    down(&mut view, 0, 20.0, 20.0);
    up(&mut view, 0);
    assert!(view.export_raster_surface().is_uniform(WHITE_ARGB));
}
