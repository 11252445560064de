//! Progress and seek math.

use super::sink::PointerSource;
use super::time::round_half_up;

/// Current position as a percentage of the total duration.
///
/// Both values are rounded to whole seconds first. A zero or unknown
/// duration yields NaN or infinity; callers decide what to render.
pub fn compute_progress_percent(current_seconds: f64, duration_seconds: f64) -> f64 {
    let current = round_half_up(current_seconds);
    let total = round_half_up(duration_seconds);
    (current / total) * 100.0
}

/// Fraction of the track covered by the pointer. Not clamped.
pub fn compute_seek_fraction(pointer_offset_x: f64, track_width: f64) -> f64 {
    pointer_offset_x / track_width
}

/// A seek position expressed as a fraction of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekRequest {
    pub fraction: f64,
}

impl SeekRequest {
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// Build a request from the pointer position over the seek track.
    pub fn from_pointer(pointer: &dyn PointerSource) -> Self {
        Self::new(compute_seek_fraction(
            pointer.pointer_offset_x(),
            pointer.track_width(),
        ))
    }

    /// Target playback offset, clamped to `[0, duration]`.
    ///
    /// Returns `None` when the product is not a number or the duration is
    /// negative.
    pub fn target_seconds(&self, duration: f64) -> Option<f64> {
        let target = duration * self.fraction;
        if target.is_nan() || duration < 0.0 {
            return None;
        }
        Some(target.clamp(0.0, duration))
    }
}
