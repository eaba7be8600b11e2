//! Color channels and engine-driven color transitions
//!
//! Controls animate their visual state as a handful of scalar channels that
//! a drawing routine reassembles into a color. [`Color`] is the 8-bit RGBA
//! currency those channels come from, and [`ColorTransition`] packages the
//! common case: one easing track per channel, all moving in lockstep.

use crate::easing::{EaseKind, EaseMode};
use crate::transition::Transition;

/// 8-bit RGBA color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as interpolation endpoints, in RGBA order
    pub fn channels(self) -> [f32; 4] {
        [
            f32::from(self.r),
            f32::from(self.g),
            f32::from(self.b),
            f32::from(self.a),
        ]
    }

    /// Reassemble a color from interpolated channel values.
    ///
    /// Values are rounded and saturated into the 8-bit range.
    pub fn from_channels(channels: [f32; 4]) -> Self {
        let clamp = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Self {
            r: clamp(channels[0]),
            g: clamp(channels[1]),
            b: clamp(channels[2]),
            a: clamp(channels[3]),
        }
    }
}

/// A smooth color change driven by one easing track per channel
///
/// All four channels share the owning transition's playhead, so the color
/// moves as one unit. Reverse playback retraces the same change backward,
/// which is how a hover-out reuses the hover-in tracks.
#[derive(Clone, Debug)]
pub struct ColorTransition {
    inner: Transition,
    start_color: Color,
    end_color: Color,
}

impl ColorTransition {
    /// Register one track per RGBA channel over the same duration and curve
    pub fn new(
        start_color: Color,
        end_color: Color,
        duration_ms: u32,
        kind: EaseKind,
        mode: EaseMode,
    ) -> Self {
        let mut inner = Transition::new();
        for (from, to) in start_color
            .channels()
            .into_iter()
            .zip(end_color.channels())
        {
            inner.add_track(kind, mode, duration_ms, from, to);
        }
        Self {
            inner,
            start_color,
            end_color,
        }
    }

    /// Begin a run from a zero playhead
    pub fn start(&mut self) {
        self.inner.start();
    }

    /// Reset the playhead without touching the channel tracks
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Play the color change backward
    pub fn set_reverse(&mut self, reversed: bool) {
        self.inner.set_reverse(reversed);
    }

    /// Advance by one timer delta
    pub fn tick(&mut self, delta_ms: f32) {
        self.inner.tick(delta_ms);
    }

    /// True while the color is still moving
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Current interpolated color
    pub fn current(&self) -> Color {
        let mut channels = [0.0; 4];
        for (slot, value) in channels.iter_mut().zip(self.inner.values()) {
            *slot = value;
        }
        Color::from_channels(channels)
    }

    /// Color at the start of a forward run
    pub fn start_color(&self) -> Color {
        self.start_color
    }

    /// Color at the end of a forward run
    pub fn end_color(&self) -> Color {
        self.end_color
    }

    /// The underlying track set, for hosts that add further channels
    pub fn transition(&self) -> &Transition {
        &self.inner
    }

    /// Mutable access to the underlying track set
    pub fn transition_mut(&mut self) -> &mut Transition {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_roundtrip() {
        let color = Color::rgba(12, 120, 250, 128);
        assert_eq!(Color::from_channels(color.channels()), color);
    }

    #[test]
    fn test_from_channels_saturates() {
        let color = Color::from_channels([-20.0, 300.0, 127.6, 0.2]);
        assert_eq!(color, Color::rgba(0, 255, 128, 0));
    }

    #[test]
    fn test_starts_at_start_color() {
        let mut fade = ColorTransition::new(
            Color::rgb(45, 45, 48),
            Color::rgb(0, 122, 204),
            150,
            EaseKind::Quad,
            EaseMode::Out,
        );
        fade.start();
        assert_eq!(fade.current(), Color::rgb(45, 45, 48));
    }

    #[test]
    fn test_reaches_end_color() {
        let mut fade = ColorTransition::new(
            Color::rgb(45, 45, 48),
            Color::rgb(0, 122, 204),
            150,
            EaseKind::Quad,
            EaseMode::Out,
        );
        fade.start();
        fade.tick(150.0);
        assert_eq!(fade.current(), Color::rgb(0, 122, 204));
        assert!(!fade.is_active());
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let mut fade = ColorTransition::new(
            Color::rgb(0, 0, 0),
            Color::rgb(255, 255, 255),
            0,
            EaseKind::Linear,
            EaseMode::In,
        );
        fade.start();
        assert!(!fade.is_active());
        assert_eq!(fade.current(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_reverse_returns_to_start_color() {
        let base = Color::rgb(45, 45, 48);
        let highlight = Color::rgb(62, 62, 64);
        let mut hover = ColorTransition::new(base, highlight, 150, EaseKind::Quad, EaseMode::Out);

        hover.start();
        hover.tick(150.0);
        assert_eq!(hover.current(), highlight);

        hover.reset();
        hover.set_reverse(true);
        hover.start();
        assert_eq!(hover.current(), highlight);
        hover.tick(150.0);
        assert_eq!(hover.current(), base);
    }
}
