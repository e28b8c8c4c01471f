//! Maps a card's drag offset (in pixels) to the visual feedback of a swipe.
//!
//! These run on every frame of a drag, so they are plain arithmetic.

use crate::deck::Swipe;

/// Offset at which the like/nope stamps start to fade in.
const STAMP_START: f64 = 40.0;
/// Distance over which a stamp goes from invisible to fully opaque.
const STAMP_RAMP: f64 = 80.0;
const ROTATE_RANGE: f64 = 200.0;
const MAX_ROTATION_DEG: f64 = 12.0;
/// A released card further than this from its origin counts as swiped.
pub const SWIPE_THRESHOLD: f64 = 120.0;

/// Opacity of the "like" stamp while dragging right. A NaN offset gives NaN.
pub fn like_opacity(x: f64) -> f64 {
    if x <= STAMP_START {
        return 0.0;
    }
    ((x - STAMP_START) / STAMP_RAMP).clamp(0.0, 1.0)
}

/// Opacity of the "nope" stamp while dragging left. A NaN offset gives NaN.
pub fn nope_opacity(x: f64) -> f64 {
    if x >= -STAMP_START {
        return 0.0;
    }
    ((-x - STAMP_START) / STAMP_RAMP).clamp(0.0, 1.0)
}

/// Card tilt in degrees, linear between -200 and 200 px and clamped outside.
pub fn rotate(x: f64) -> f64 {
    if x <= -ROTATE_RANGE {
        -MAX_ROTATION_DEG
    } else if x >= ROTATE_RANGE {
        MAX_ROTATION_DEG
    } else {
        x / ROTATE_RANGE * MAX_ROTATION_DEG
    }
}

/// What releasing a card at offset `(dx, dy)` does.
///
/// A horizontal throw past the threshold wins over a vertical one; an upward
/// throw defers the card; anything else springs back (`None`).
pub fn swipe_for_offset(dx: f64, dy: f64) -> Option<Swipe> {
    if dx.abs() > SWIPE_THRESHOLD {
        Some(if dx > 0.0 { Swipe::Like } else { Swipe::Pass })
    } else if dy < -SWIPE_THRESHOLD {
        Some(Swipe::Maybe)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn like_opacity_boundaries() {
        assert!(close(like_opacity(0.0), 0.0));
        assert!(close(like_opacity(40.0), 0.0));
        assert!(close(like_opacity(100.0), 0.75));
        assert!(close(like_opacity(120.0), 1.0));
        assert!(close(like_opacity(200.0), 1.0));
    }

    #[test]
    fn nope_opacity_mirrors_like() {
        assert!(close(nope_opacity(-100.0), 0.75));
        assert!(close(nope_opacity(-40.0), 0.0));
        assert!(close(nope_opacity(-120.0), 1.0));
        assert!(close(nope_opacity(-500.0), 1.0));
    }

    #[test]
    fn opposite_direction_never_shows_a_stamp() {
        assert!(close(like_opacity(-200.0), 0.0));
        assert!(close(nope_opacity(200.0), 0.0));
    }

    #[test]
    fn nan_offsets_stay_nan() {
        assert!(like_opacity(f64::NAN).is_nan());
        assert!(nope_opacity(f64::NAN).is_nan());
        assert!(rotate(f64::NAN).is_nan());
    }

    #[test]
    fn rotation_is_clamped() {
        assert!(close(rotate(-200.0), -12.0));
        assert!(close(rotate(-1000.0), -12.0));
        assert!(close(rotate(0.0), 0.0));
        assert!(close(rotate(100.0), 6.0));
        assert!(close(rotate(200.0), 12.0));
        assert!(close(rotate(f64::INFINITY), 12.0));
    }

    #[test]
    fn release_decisions() {
        assert_eq!(swipe_for_offset(121.0, 0.0), Some(Swipe::Like));
        assert_eq!(swipe_for_offset(-121.0, -300.0), Some(Swipe::Pass));
        assert_eq!(swipe_for_offset(120.0, 0.0), None);
        assert_eq!(swipe_for_offset(10.0, -130.0), Some(Swipe::Maybe));
        assert_eq!(swipe_for_offset(10.0, 130.0), None);
    }
}
