//! Transition presets for common control states
//!
//! Pre-built track sets for the handful of visual-state changes every
//! custom-drawn control plays: hover highlight, press feedback, fades.

use crate::color::{Color, ColorTransition};
use crate::easing::{EaseKind, EaseMode};
use crate::transition::Transition;

/// Default hover highlight duration, in milliseconds
pub const HOVER_DURATION_MS: u32 = 150;

/// Default press feedback duration, in milliseconds
pub const PRESS_DURATION_MS: u32 = 80;

/// Pre-built transitions for common control states
pub struct TransitionPreset;

impl TransitionPreset {
    // ========================================================================
    // Color transitions
    // ========================================================================

    /// Hover highlight: base color toward the highlight shade, decelerating.
    ///
    /// Play it forward on mouse-enter and in reverse on mouse-leave.
    pub fn hover(base: Color, highlight: Color) -> ColorTransition {
        ColorTransition::new(
            base,
            highlight,
            HOVER_DURATION_MS,
            EaseKind::Quad,
            EaseMode::Out,
        )
    }

    /// Press feedback: snappier than hover, accelerating into the pressed shade
    pub fn press(base: Color, pressed: Color) -> ColorTransition {
        ColorTransition::new(base, pressed, PRESS_DURATION_MS, EaseKind::Quad, EaseMode::In)
    }

    // ========================================================================
    // Scalar fades
    // ========================================================================

    /// Opacity fade from fully transparent to fully opaque (0 to 255)
    pub fn fade_in(duration_ms: u32) -> Transition {
        let mut transition = Transition::new();
        transition.add_track(EaseKind::Sine, EaseMode::Out, duration_ms, 0.0, 255.0);
        transition
    }

    /// Opacity fade from fully opaque to fully transparent (255 to 0)
    pub fn fade_out(duration_ms: u32) -> Transition {
        let mut transition = Transition::new();
        transition.add_track(EaseKind::Sine, EaseMode::In, duration_ms, 255.0, 0.0);
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_reaches_highlight() {
        let base = Color::rgb(45, 45, 48);
        let highlight = Color::rgb(62, 62, 64);
        let mut hover = TransitionPreset::hover(base, highlight);

        hover.start();
        assert_eq!(hover.current(), base);

        hover.tick(HOVER_DURATION_MS as f32);
        assert_eq!(hover.current(), highlight);
        assert!(!hover.is_active());
    }

    #[test]
    fn test_press_is_snappier_than_hover() {
        assert!(PRESS_DURATION_MS < HOVER_DURATION_MS);

        let base = Color::rgb(45, 45, 48);
        let pressed = Color::rgb(30, 30, 32);
        let mut press = TransitionPreset::press(base, pressed);

        press.start();
        press.tick(PRESS_DURATION_MS as f32);
        assert_eq!(press.current(), pressed);
    }

    #[test]
    fn test_fade_in_endpoints() {
        let mut fade = TransitionPreset::fade_in(200);
        fade.start();
        assert_eq!(fade.value(0).unwrap(), 0.0);

        fade.tick(200.0);
        assert_eq!(fade.value(0).unwrap(), 255.0);
    }

    #[test]
    fn test_fade_out_endpoints() {
        let mut fade = TransitionPreset::fade_out(200);
        fade.start();
        assert_eq!(fade.value(0).unwrap(), 255.0);

        fade.tick(200.0);
        assert_eq!(fade.value(0).unwrap(), 0.0);
    }
}
