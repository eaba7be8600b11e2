//! Sheen Animation System
//!
//! Easing tracks, color transitions, and tick scheduling for the Sheen
//! custom-drawn control toolkit.
//!
//! # Features
//!
//! - **Easing Curves**: Named families (Sine, Back, Bounce, ...) in
//!   In/Out/InOut phases, all closed-form and allocation-free
//! - **Lockstep Transitions**: Many value tracks advanced by one shared
//!   playhead, with per-track durations and reverse playback
//! - **Color Transitions**: Per-channel RGBA interpolation for hover and
//!   press states
//! - **Tick Scheduling**: One externally-delivered timer delta fanned out
//!   to every live transition
//!
//! # Example
//!
//! ```rust
//! use sheen_animation::{EaseKind, EaseMode, Transition};
//!
//! let mut transition = Transition::new();
//! let alpha = transition.add_track(EaseKind::Sine, EaseMode::Out, 200, 0.0, 255.0);
//!
//! transition.start();
//! transition.tick(100.0);
//! assert!(transition.is_active());
//! assert!(transition.value(alpha).unwrap() > 0.0);
//!
//! transition.tick(100.0);
//! assert_eq!(transition.value(alpha).unwrap(), 255.0);
//! assert!(!transition.is_active());
//! ```

pub mod color;
pub mod easing;
pub mod error;
pub mod presets;
pub mod scheduler;
pub mod transition;

pub use color::{Color, ColorTransition};
pub use easing::{EaseKind, EaseMode};
pub use error::{AnimationError, Result};
pub use presets::TransitionPreset;
pub use scheduler::{TransitionId, TransitionScheduler};
pub use transition::{Track, Transition};
