// Core types shared by the sketch core and the window host.

/// Platform-assigned identifier of one touch contact.
/// Unique among concurrently active touches, reusable once released.
pub type PointerId = i32;

/// A position on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Record a raw touch coordinate; fractions are truncated toward zero.
    pub fn from_touch(x: f32, y: f32) -> Self {
        Self { x: x as i32, y: y as i32 }
    }
}

/// One pointer's position inside a movement batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f32,
    pub y: f32,
}

/// A single input event from the platform's dispatch layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchEvent {
    /// A finger landed (first finger or an additional one).
    Down { id: PointerId, x: f32, y: f32 },
    /// Batched movement covering every currently active pointer.
    Move(Vec<PointerSample>),
    /// A finger lifted.
    Up { id: PointerId },
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}
