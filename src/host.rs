//! Glue between the window and the sketch: mouse-as-finger, the pickers,
//! and the one-dialog-at-a-time gate.

use crate::types::{PointerId, PointerSample, TouchEvent};
use std::time::{Duration, Instant};

/// Colors reachable from the number keys 1..8, as 0xAARRGGBB.
pub const PALETTE: [u32; 8] = [
    0xFF00_0000, // black
    0xFFFF_0000, // red
    0xFF00_A000, // green
    0xFF00_00FF, // blue
    0xFFFF_D700, // yellow
    0xFFFF_00FF, // magenta
    0xFF00_FFFF, // cyan
    0xFFFF_FFFF, // white (rubber)
];

pub const MAX_LINE_WIDTH: f32 = 50.0;

/// Nudge a width by `step`, kept within 0..=MAX_LINE_WIDTH.
pub fn step_width(width: f32, step: f32) -> f32 {
    (width + step).clamp(0.0, MAX_LINE_WIDTH)
}

/// Amount one Left/Right press moves the selected color channel.
pub const CHANNEL_STEP: i32 = 8;

/// One of the four sliders of the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    fn shift(self) -> u32 {
        match self {
            Channel::Alpha => 24,
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }

    pub fn label(self) -> char {
        match self {
            Channel::Alpha => 'A',
            Channel::Red => 'R',
            Channel::Green => 'G',
            Channel::Blue => 'B',
        }
    }

    /// A -> R -> G -> B -> A.
    pub fn next(self) -> Self {
        match self {
            Channel::Alpha => Channel::Red,
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Alpha,
        }
    }

    pub fn value(self, argb: u32) -> u8 {
        (argb >> self.shift()) as u8
    }
}

/// Move one channel of `argb` by `step`, saturating at 0 and 255.
/// The other three channels are untouched.
pub fn step_channel(argb: u32, channel: Channel, step: i32) -> u32 {
    let v = (channel.value(argb) as i32 + step).clamp(0, 255) as u32;
    let shift = channel.shift();
    (argb & !(0xFF << shift)) | (v << shift)
}

/// Picker readout, e.g. "A:255 >R:0 G:0 B:0" with the selected channel marked.
pub fn channel_readout(argb: u32, selected: Channel) -> String {
    Channel::ALL
        .iter()
        .map(|&c| {
            let mark = if c == selected { ">" } else { "" };
            format!("{mark}{}:{}", c.label(), c.value(argb))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The color as it looks over the white canvas, as 0x00RRGGBB.
pub fn swatch_rgb(argb: u32) -> u32 {
    let [a, r, g, b] = argb.to_be_bytes();
    let over_white = |c: u8| (c as u32 * a as u32 + 255 * (255 - a as u32) + 127) / 255;
    (over_white(r) << 16) | (over_white(g) << 8) | over_white(b)
}

/// Turns a single mouse button into finger events for one pointer id.
pub struct MouseFinger {
    id: PointerId,
    down: bool,
    last: Option<(f32, f32)>,
}

impl MouseFinger {
    pub fn new(id: PointerId) -> Self {
        Self { id, down: false, last: None }
    }

    /// Compare this frame's button/position with the previous frame.
    /// Releasing outside the window still ends the touch.
    pub fn poll(&mut self, button_down: bool, pos: Option<(f32, f32)>) -> Option<TouchEvent> {
        match (self.down, button_down, pos) {
            (false, true, Some((x, y))) => {
                self.down = true;
                self.last = Some((x, y));
                Some(TouchEvent::Down { id: self.id, x, y })
            }
            (true, false, _) => {
                self.down = false;
                self.last = None;
                Some(TouchEvent::Up { id: self.id })
            }
            (true, true, Some((x, y))) if self.last != Some((x, y)) => {
                self.last = Some((x, y));
                Some(TouchEvent::Move(vec![PointerSample { id: self.id, x, y }]))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    ConfirmErase,
}

/// At most one dialog is on screen; requests made while one is open are dropped.
#[derive(Debug, Default)]
pub struct DialogGate {
    open: Option<Dialog>,
}

impl DialogGate {
    /// Open `dialog` unless another one is showing. Returns whether it opened.
    pub fn request(&mut self, dialog: Dialog) -> bool {
        if self.open.is_some() {
            log::debug!("{dialog:?} suppressed, a dialog is already on screen");
            return false;
        }
        self.open = Some(dialog);
        true
    }

    pub fn current(&self) -> Option<Dialog> {
        self.open
    }

    pub fn close(&mut self) -> Option<Dialog> {
        self.open.take()
    }
}

/// Short-lived HUD message such as "SAVED".
pub struct Notice {
    pub text: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Notice {
    pub fn new(text: impl Into<String>, ttl: Duration) -> Self {
        Self { text: text.into(), shown_at: Instant::now(), ttl }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.ttl
    }
}
