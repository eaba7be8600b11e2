//! Animation error types

use thiserror::Error;

/// Animation-related errors
///
/// Everything here is local and recoverable. A failed value lookup never
/// stops the host; the caller falls back to the start or end value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    /// Track index was never registered on this transition
    #[error("no track at index {index} (transition has {count} tracks)")]
    InvalidTrack { index: usize, count: usize },
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
