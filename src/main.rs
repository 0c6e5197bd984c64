// eSketch: finger painting in a window.
// • Hold Left Mouse and drag: paint with the current pencil.
// • 1..8 pick a preset color, Up/Down change the line width.
// • Tab selects the A/R/G/B channel, Left/Right move it (any ARGB color).
// • E asks to erase the drawing (Y confirms, N/ESC cancels).
// • S saves the drawing as a JPEG in the gallery directory.
// • ESC quits when no dialog is open.

use esketch::config::Settings;
use esketch::draw::{draw_text_5x7, fill_rect, stroke_rect, text_width_5x7, Drawer};
use esketch::gallery::save_to_gallery;
use esketch::host::{
    channel_readout, step_channel, step_width, swatch_rgb, Channel, Dialog, DialogGate, MouseFinger, Notice,
    CHANNEL_STEP, PALETTE,
};
use esketch::logging::{init_logging, LoggingConfig};
use esketch::render::to_frame_buffer;
use esketch::types::FrameBuffer;
use esketch::{Error, Pencil, SketchView};
use minifb::Key;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tiny_skia::Pixmap;

const PALETTE_KEYS: [Key; 8] =
    [Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5, Key::Key6, Key::Key7, Key::Key8];
const NOTICE_TTL: Duration = Duration::from_secs(2);
const HUD_TEXT: u32 = 0x00FF_FFFF;
const HUD_SHADOW: u32 = 0x0000_0000;
const HUD_PANEL: u32 = 0x0030_3030;

fn main() -> Result<(), Error> {
    /* --- Settings + logging --- */
    let settings_path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| "esketch.json".into());
    let settings = Settings::load(&settings_path)?;
    init_logging(if settings.debug_logging { LoggingConfig::debug() } else { LoggingConfig::default() });
    log::info!("settings from {}: {:?}", settings_path.display(), settings);

    /* --- Window + sketch --- */
    let (w, h) = (settings.canvas_width as usize, settings.canvas_height as usize);
    let mut drawer = Drawer::new("eSketch", w, h)?;
    let pencil = Pencil::new(settings.color, settings.line_width);
    let mut sketch = SketchView::new(w as u32, h as u32, pencil, settings.touch_tolerance)?;

    // Frame target (tiny-skia) and what minifb actually shows.
    let mut target = new_target(w, h)?;
    let mut screen = FrameBuffer::new(w, h);

    let mut finger = MouseFinger::new(0);
    let mut dialogs = DialogGate::default();
    let mut channel = Channel::Red;
    let mut notice: Option<Notice> = None;
    let mut hud_dirty = true;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        // 1) Follow the window size; the drawing starts over blank.
        let (nw, nh) = drawer.size();
        if nw > 0 && nh > 0 && (nw, nh) != (screen.width, screen.height) {
            sketch.resize(nw as u32, nh as u32)?;
            target = new_target(nw, nh)?;
            screen = FrameBuffer::new(nw, nh);
        }

        // 2) Keys: the open dialog gets them first.
        match dialogs.current() {
            Some(Dialog::ConfirmErase) => {
                if drawer.pressed_once(Key::Y) {
                    dialogs.close();
                    sketch.clear();
                    hud_dirty = true;
                } else if drawer.pressed_once(Key::N) || drawer.pressed_once(Key::Escape) {
                    dialogs.close();
                    hud_dirty = true;
                }
            }
            None => {
                if drawer.pressed_once(Key::Escape) {
                    break;
                }
                if drawer.pressed_once(Key::E) && dialogs.request(Dialog::ConfirmErase) {
                    hud_dirty = true;
                }
                for (key, color) in PALETTE_KEYS.iter().zip(PALETTE) {
                    if drawer.pressed_once(*key) {
                        sketch.set_color(color);
                    }
                }
                if drawer.pressed_once(Key::Tab) {
                    channel = channel.next();
                    hud_dirty = true;
                }
                if drawer.pressed_repeat(Key::Right) {
                    sketch.set_color(step_channel(sketch.color(), channel, CHANNEL_STEP));
                }
                if drawer.pressed_repeat(Key::Left) {
                    sketch.set_color(step_channel(sketch.color(), channel, -CHANNEL_STEP));
                }
                if drawer.pressed_repeat(Key::Up) {
                    sketch.set_width(step_width(sketch.width(), 1.0));
                }
                if drawer.pressed_repeat(Key::Down) {
                    sketch.set_width(step_width(sketch.width(), -1.0));
                }
                if drawer.pressed_once(Key::S) {
                    let text = match save_to_gallery(sketch.export_raster_surface(), &settings.gallery_dir) {
                        Ok(_) => "SAVED",
                        Err(e) => {
                            log::error!("{e}");
                            "SAVE FAILED"
                        }
                    };
                    notice = Some(Notice::new(text, NOTICE_TTL));
                    hud_dirty = true;
                }
            }
        }

        // 3) Mouse as finger 0.
        if let Some(event) = finger.poll(drawer.left_mouse_down(), drawer.mouse_pos()) {
            sketch.handle_input_event(&event);
        }

        // 4) Drop stale notifications.
        if notice.as_ref().is_some_and(|n| n.expired(Instant::now())) {
            notice = None;
            hud_dirty = true;
        }

        // 5) Redraw only when something changed, present every frame.
        if sketch.take_redraw_request() || hud_dirty {
            sketch.render(&mut target);
            to_frame_buffer(&target, &mut screen);
            draw_hud(&mut screen, &sketch, channel, dialogs.current(), notice.as_ref());
            hud_dirty = false;
        }
        drawer.present(&screen)?;
    }

    Ok(())
}

fn new_target(width: usize, height: usize) -> Result<Pixmap, Error> {
    let (width, height) = (width as u32, height as u32);
    Pixmap::new(width, height).ok_or(Error::ResourceExhausted { width, height })
}

/// Swatch, width and color readout in the corner, then any dialog or notice on top.
fn draw_hud(
    fb: &mut FrameBuffer,
    sketch: &SketchView,
    channel: Channel,
    dialog: Option<Dialog>,
    notice: Option<&Notice>,
) {
    fill_rect(fb, 6, 6, 14, 14, swatch_rgb(sketch.color()));
    stroke_rect(fb, 5, 5, 16, 16, HUD_SHADOW);
    draw_text_5x7(fb, 26, 9, &format!("WIDTH: {:.0}", sketch.width()), HUD_TEXT, HUD_SHADOW);
    draw_text_5x7(fb, 6, 26, &channel_readout(sketch.color(), channel), HUD_TEXT, HUD_SHADOW);

    if let Some(Dialog::ConfirmErase) = dialog {
        let text = "ERASE DRAWING? Y/N";
        let tw = text_width_5x7(text);
        let (cx, cy) = (fb.width as i32 / 2, fb.height as i32 / 2);
        fill_rect(fb, cx - tw / 2 - 10, cy - 14, tw + 20, 28, HUD_PANEL);
        stroke_rect(fb, cx - tw / 2 - 10, cy - 14, tw + 20, 28, HUD_TEXT);
        draw_text_5x7(fb, cx - tw / 2, cy - 3, text, HUD_TEXT, HUD_SHADOW);
    }

    if let Some(n) = notice {
        let y = fb.height as i32 - 16;
        fill_rect(fb, 4, y - 4, text_width_5x7(&n.text) + 10, 15, HUD_PANEL);
        draw_text_5x7(fb, 9, y, &n.text, HUD_TEXT, HUD_SHADOW);
    }
}
