//! Headless carousel controllers.
//!
//! Structure mirrors the split between what is computed and what is drawn:
//! state and navigation live in [`controller`], the pure view output in
//! [`plan`], timing in [`autoplay`], touch interpretation in [`gesture`],
//! and multi-instance ownership in [`registry`]. Shells integrate through
//! [`messages::update`] or by calling controllers directly.

pub mod autoplay;
pub mod controller;
pub mod gesture;
pub mod messages;
pub mod plan;
pub mod registry;
pub mod types;

pub use autoplay::Autoplay;
pub use controller::CarouselController;
pub use gesture::{SwipeDirection, SwipeTracker};
pub use messages::{update, CarouselMessage};
pub use plan::{RenderPlan, SlideClass, TrackOffset};
pub use registry::CarouselRegistry;
pub use types::{CarouselConfig, CarouselKey, CarouselMode, RegionDescription};
