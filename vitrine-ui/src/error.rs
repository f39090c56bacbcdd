//! Bind-time errors.
//!
//! Runtime navigation is error-free by construction: out-of-range indices
//! wrap, empty regions disable the controller. The only fallible surface
//! is interpreting a bind description or tuning overlay.

use thiserror::Error;

/// Problems found while binding a controller to a region description.
#[derive(Debug, Error, PartialEq)]
pub enum BindError {
    /// The region reported no slides at all.
    #[error("region has no slides; carousel disabled")]
    EmptySlideSet,

    /// Slide geometry that cannot produce a stride.
    #[error("slide width must be positive, got {0}")]
    InvalidSlideWidth(f32),

    /// A tuning overlay failed to parse.
    #[error("invalid tuning overlay: {0}")]
    InvalidOverlay(String),
}
