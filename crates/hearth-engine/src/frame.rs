//! Published render frames and the single-slot handoff to the
//! rendering collaborator.

use std::sync::{Arc, Mutex};

use hearth_core::{TickId, ViewMode};

/// Neutral background texel: opaque black.
pub const BACKGROUND_RGBA: [u8; 4] = [0, 0, 0, 255];

/// A rendered false-color snapshot of the grid, one RGBA texel per
/// cell, published once per tick.
///
/// Temperature view writes into the red channel, material view into the
/// green channel; the other channel keeps whatever the previous view
/// left there until a view switch clears the frame to the background.
#[derive(Clone, Debug)]
pub struct Frame {
    /// The tick this frame was rendered after.
    pub tick: TickId,
    /// The view mode the frame was rendered in.
    pub view: ViewMode,
    /// Frame width in texels (equals the grid width).
    pub width: u32,
    /// Frame height in texels (equals the grid height).
    pub height: u32,
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create a background-colored frame sized to the grid.
    pub fn new(width: u32, height: u32) -> Self {
        let texels = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(texels * 4);
        for _ in 0..texels {
            pixels.extend_from_slice(&BACKGROUND_RGBA);
        }
        Self {
            tick: TickId(0),
            view: ViewMode::default(),
            width,
            height,
            pixels,
        }
    }

    /// Reset every texel to the neutral background.
    pub fn clear(&mut self) {
        for texel in self.pixels.chunks_exact_mut(4) {
            texel.copy_from_slice(&BACKGROUND_RGBA);
        }
    }
}

/// Latest-wins handoff slot between the tick thread and the rendering
/// collaborator.
///
/// The render side only ever wants the newest frame, so a depth-one
/// slot replaces a ring: the tick thread publishes an `Arc`'d frame and
/// readers clone the `Arc` out without blocking publication.
#[derive(Debug)]
pub struct FrameSlot {
    latest: Mutex<Arc<Frame>>,
}

impl FrameSlot {
    /// Create a slot seeded with an initial frame.
    pub fn new(initial: Frame) -> Self {
        Self {
            latest: Mutex::new(Arc::new(initial)),
        }
    }

    /// Replace the published frame.
    pub fn publish(&self, frame: Frame) {
        let mut slot = self.latest.lock().expect("frame slot poisoned");
        *slot = Arc::new(frame);
    }

    /// The most recently published frame.
    pub fn latest(&self) -> Arc<Frame> {
        Arc::clone(&self.latest.lock().expect("frame slot poisoned"))
    }
}
