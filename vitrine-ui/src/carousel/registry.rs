//! Registry for all carousel instances on a page, keyed by [`CarouselKey`].
//!
//! Each instance owns its state outright; nothing is shared between keys,
//! so adding a second carousel to a page can never leak a current index or
//! an autoplay timer into the first.

use std::collections::HashMap;
use std::time::Instant;

use super::controller::CarouselController;
use super::types::CarouselKey;

/// Owning map of carousel controllers.
#[derive(Debug, Default)]
pub struct CarouselRegistry {
    states: HashMap<CarouselKey, CarouselController>,
}

impl CarouselRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a controller, inserting one from the factory when absent. The
    /// factory may decline (unusable region), in which case nothing is
    /// inserted.
    pub fn ensure_with<F>(&mut self, key: CarouselKey, init: F) -> Option<&mut CarouselController>
    where
        F: FnOnce() -> Option<CarouselController>,
    {
        if !self.states.contains_key(&key) {
            let controller = init()?;
            self.states.insert(key.clone(), controller);
        }
        self.states.get_mut(&key)
    }

    /// Shared access to an instance.
    pub fn get(&self, key: &CarouselKey) -> Option<&CarouselController> {
        self.states.get(key)
    }

    /// Mutable access to an instance.
    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut CarouselController> {
        self.states.get_mut(key)
    }

    /// Remove an instance (region left the page).
    pub fn remove(&mut self, key: &CarouselKey) -> Option<CarouselController> {
        self.states.remove(key)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the registry has no instances.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Fan a frame tick to every instance; returns the keys that advanced
    /// via autoplay so the shell knows which regions to repaint.
    pub fn tick_all(&mut self, now: Instant) -> Vec<CarouselKey> {
        let mut advanced = Vec::new();
        for (key, controller) in self.states.iter_mut() {
            if controller.tick(now) {
                advanced.push(key.clone());
            }
        }
        advanced
    }

    /// Apply a page-wide resize to every instance.
    pub fn resize_all(&mut self, width_px: f32) {
        for controller in self.states.values_mut() {
            controller.resize(width_px);
        }
    }
}
