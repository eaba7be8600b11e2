//! Lockstep easing tracks for control state transitions
//!
//! A [`Transition`] owns a set of easing tracks that share one elapsed-time
//! cursor: every track starts together and samples against the same
//! playhead. Tracks keep their own durations, so short channels park on
//! their end value while longer siblings are still moving; the transition
//! as a whole stays active until the slowest track finishes.

use smallvec::SmallVec;

use crate::easing::{EaseKind, EaseMode};
use crate::error::{AnimationError, Result};

/// One interpolated channel inside a [`Transition`]
///
/// Immutable once registered. Where the playhead currently is lives on the
/// owning transition, not on the track.
#[derive(Clone, Copy, Debug)]
pub struct Track {
    kind: EaseKind,
    mode: EaseMode,
    duration_ms: u32,
    start_value: f32,
    end_value: f32,
}

impl Track {
    /// Curve family
    pub fn kind(&self) -> EaseKind {
        self.kind
    }

    /// Curve phase
    pub fn mode(&self) -> EaseMode {
        self.mode
    }

    /// Duration in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Value at the start of a forward run
    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    /// Value at the end of a forward run
    pub fn end_value(&self) -> f32 {
        self.end_value
    }

    /// Sample the track at an absolute cursor position.
    ///
    /// Progress past the track's own duration saturates, and a zero
    /// duration counts as already finished. Reverse playback mirrors the
    /// playhead (`t -> 1 - t`) and runs the same curve; start and end
    /// values are never swapped.
    fn value_at(&self, elapsed_ms: f32, reversed: bool) -> f32 {
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
        };
        let t = if reversed { 1.0 - t } else { t };

        let eased = self.kind.apply(self.mode, t);
        let value = self.start_value + (self.end_value - self.start_value) * eased;

        // Overshooting curves (Back, Elastic) saturate at the endpoints;
        // the consuming channels are 8-bit color components
        if self.start_value <= self.end_value {
            value.clamp(self.start_value, self.end_value)
        } else {
            value.clamp(self.end_value, self.start_value)
        }
    }
}

/// A set of easing tracks advanced in lockstep by one shared playhead
///
/// Tracks are append-only; an index returned by [`add_track`] stays valid
/// for the life of the transition. A run is started with [`start`], driven
/// by [`tick`] at whatever cadence the host timer delivers, and read back
/// per channel with [`value`].
///
/// [`add_track`]: Transition::add_track
/// [`start`]: Transition::start
/// [`tick`]: Transition::tick
/// [`value`]: Transition::value
#[derive(Clone, Debug, Default)]
pub struct Transition {
    tracks: SmallVec<[Track; 8]>,
    elapsed_ms: f32,
    max_duration_ms: u32,
    reversed: bool,
    active: bool,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new track and return its stable index.
    ///
    /// No duplicate detection: the same value pair may be registered any
    /// number of times for independent channels. A zero duration is
    /// accepted and behaves as an instant transition.
    pub fn add_track(
        &mut self,
        kind: EaseKind,
        mode: EaseMode,
        duration_ms: u32,
        start_value: f32,
        end_value: f32,
    ) -> usize {
        let index = self.tracks.len();
        if duration_ms == 0 {
            tracing::debug!(index, "zero-duration track snaps straight to its end value");
        }
        self.tracks.push(Track {
            kind,
            mode,
            duration_ms,
            start_value,
            end_value,
        });
        self.max_duration_ms = self.max_duration_ms.max(duration_ms);
        index
    }

    /// Play the track set backward.
    ///
    /// Reversal remaps the playhead as `t -> 1 - t` before the curve is
    /// applied, so hover-out retraces hover-in through the same tracks
    /// without re-registering them.
    pub fn set_reverse(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Whether the track set currently plays backward
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Reset the shared playhead to zero without removing tracks.
    ///
    /// Leaves the transition idle; [`start`] arms the next run.
    ///
    /// [`start`]: Transition::start
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.active = false;
    }

    /// Begin a run from a zero playhead.
    ///
    /// A transition with no tracks, or only zero-duration tracks, finishes
    /// immediately and never reports itself active.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.active = self.max_duration_ms > 0;
    }

    /// Advance the shared playhead by one timer delta.
    ///
    /// Deltas may be arbitrarily irregular; negative deltas count as zero.
    /// A no-op until [`start`] is called. Once the playhead reaches the
    /// slowest track's duration it saturates there and the transition
    /// deactivates.
    ///
    /// [`start`]: Transition::start
    pub fn tick(&mut self, delta_ms: f32) {
        if !self.active {
            return;
        }

        self.elapsed_ms += delta_ms.max(0.0);

        let max = self.max_duration_ms as f32;
        if self.elapsed_ms >= max {
            self.elapsed_ms = max;
            self.active = false;
            tracing::trace!(elapsed_ms = self.elapsed_ms, "transition finished");
        }
    }

    /// Interpolated value for one track at the current playhead.
    ///
    /// Past the track's own duration this returns the end value (start
    /// value when reversed), independent of whether slower siblings keep
    /// the transition active. An unregistered index is an error, never a
    /// silent default.
    pub fn value(&self, index: usize) -> Result<f32> {
        self.tracks
            .get(index)
            .map(|track| track.value_at(self.elapsed_ms, self.reversed))
            .ok_or(AnimationError::InvalidTrack {
                index,
                count: self.tracks.len(),
            })
    }

    /// Interpolated values for all tracks, in registration order
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        let elapsed_ms = self.elapsed_ms;
        let reversed = self.reversed;
        self.tracks
            .iter()
            .map(move |track| track.value_at(elapsed_ms, reversed))
    }

    /// True strictly while the playhead has not reached the slowest track
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Registered tracks, in registration order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of registered tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Whether any tracks are registered
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Duration of the slowest track, in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.max_duration_ms
    }

    /// Current playhead position, in milliseconds
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Normalized playhead position against the slowest track (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.max_duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.max_duration_ms as f32).clamp(0.0, 1.0)
    }
}
