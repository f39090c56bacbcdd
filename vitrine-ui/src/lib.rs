//! Headless interaction controllers for carousel-driven pages.
//!
//! This crate owns the stateful half of the toolkit: the carousel
//! navigation state machine with its transition lock, autoplay timing,
//! swipe recognition, and the smaller page controllers (scroll reveal,
//! count-up, ticker). Nothing here renders; a shell feeds events in
//! (clicks, pointer moves, touch deltas, resize, frame ticks) and reads
//! back a [`carousel::plan`] describing what the surface should show.
//!
//! All time-dependent operations take `now: Instant` so state can be
//! driven deterministically in tests, with no wall-clock sleeps.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod countup;
pub mod error;
pub mod reveal;
pub mod ticker;

pub use carousel::{
    CarouselConfig, CarouselController, CarouselKey, CarouselMessage, CarouselMode,
    CarouselRegistry,
};
pub use config::TuningOverlay;
pub use countup::CountUp;
pub use error::BindError;
pub use reveal::RevealSet;
pub use ticker::Ticker;
