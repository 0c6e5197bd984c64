//! Demultiplexes the multi-finger input stream into per-finger sessions.

use std::collections::HashMap;

use crate::pencil::Pencil;
use crate::stroke::FingerSession;
use crate::surface::RasterSurface;
use crate::types::{PointerId, PointerSample, TouchEvent};

/// Minimum movement on either axis before a new segment is recorded.
pub const TOUCH_TOLERANCE: f32 = 5.0;

pub struct TouchRouter {
    sessions: HashMap<PointerId, FingerSession>,
    tolerance: f32,
}

impl Default for TouchRouter {
    fn default() -> Self {
        Self::new(TOUCH_TOLERANCE)
    }
}

impl TouchRouter {
    pub fn new(tolerance: f32) -> Self {
        Self { sessions: HashMap::new(), tolerance }
    }

    /// Route one event. Finished strokes are baked into `surface` with the
    /// pencil as it is at touch-up.
    pub fn dispatch(&mut self, event: &TouchEvent, surface: &mut RasterSurface, pencil: &Pencil) {
        match event {
            TouchEvent::Down { id, x, y } => self.touch_started(*id, *x, *y),
            TouchEvent::Move(samples) => self.touch_moved(samples),
            TouchEvent::Up { id } => self.touch_ended(*id, surface, pencil),
        }
    }

    /// A seen-before id keeps its session; only the path and baseline reset.
    pub fn touch_started(&mut self, id: PointerId, x: f32, y: f32) {
        match self.sessions.get_mut(&id) {
            Some(session) => {
                session.restart(x, y);
                log::debug!("pointer {id} restarted at ({x}, {y})");
            }
            None => {
                self.sessions.insert(id, FingerSession::start(x, y));
                log::debug!("pointer {id} started at ({x}, {y})");
            }
        }
    }

    /// Unknown ids in the batch are skipped.
    pub fn touch_moved(&mut self, samples: &[PointerSample]) {
        for sample in samples {
            if let Some(session) = self.sessions.get_mut(&sample.id) {
                session.advance(sample.x, sample.y, self.tolerance);
            }
        }
    }

    /// Bake the finger's path and keep the emptied session for reuse.
    pub fn touch_ended(&mut self, id: PointerId, surface: &mut RasterSurface, pencil: &Pencil) {
        let Some(session) = self.sessions.get_mut(&id) else {
            log::debug!("touch-up for unknown pointer {id} ignored");
            return;
        };
        surface.bake_path(&session.path, pencil);
        session.path.reset();
    }

    pub fn session(&self, id: PointerId) -> Option<&FingerSession> {
        self.sessions.get(&id)
    }

    /// Every known session, including dormant ones with empty paths.
    pub fn sessions(&self) -> impl Iterator<Item = (PointerId, &FingerSession)> {
        self.sessions.iter().map(|(id, s)| (*id, s))
    }

    /// Sessions whose path currently has something to draw.
    pub fn live_sessions(&self) -> impl Iterator<Item = &FingerSession> {
        self.sessions.values().filter(|s| !s.path.is_empty())
    }

    /// Forget every session.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
