//! Frame sequences keyed by player status, and a fractional frame cursor.

use crate::assets::registry::AssetLibrary;
use crate::components::sprite::Image;
use crate::components::status::Status;
use crate::error::LevelError;

/// One non-empty frame sequence per `Status`.
///
/// Built once and validated, so looking up the current status during a frame
/// cannot fail.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    sequences: Vec<Vec<Image>>,
}

impl AnimationSet {
    /// Load `"{prefix}{status key}"` for every status from the library,
    /// e.g. `"player/down_idle"`.
    pub fn from_library(library: &AssetLibrary, prefix: &str) -> Result<Self, LevelError> {
        let mut sequences = Vec::with_capacity(Status::COUNT);
        for status in Status::all() {
            let name = format!("{}{}", prefix, status.key());
            sequences.push(library.require(&name)?.to_vec());
        }
        Ok(Self { sequences })
    }

    /// Frames for `status`. Never empty.
    pub fn frames(&self, status: Status) -> &[Image] {
        &self.sequences[status.index()]
    }
}

/// Fractional frame cursor advanced by a fixed speed every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    /// Current position in the sequence. Floors to the shown frame.
    pub frame_index: f32,
    /// Frames advanced per update.
    pub speed: f32,
}

impl Animator {
    pub fn new(speed: f32) -> Self {
        Self {
            frame_index: 0.0,
            speed,
        }
    }

    /// Advance by one update over a sequence of `len` frames and return the
    /// frame to show. Reaching or passing the end wraps to frame 0.
    ///
    /// The cursor is not reset on status changes; a cursor past the end of a
    /// shorter sequence wraps on this call instead.
    pub fn advance(&mut self, len: usize) -> usize {
        self.frame_index += self.speed;
        if self.frame_index >= len as f32 {
            self.frame_index = 0.0;
        }
        self.frame_index as usize
    }

    /// Advance and pick the frame from `frames`.
    pub fn next_frame<'a>(&mut self, frames: &'a [Image]) -> &'a Image {
        let idx = self.advance(frames.len());
        &frames[idx]
    }
}
