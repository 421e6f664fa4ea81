use std::collections::BTreeMap;

use crate::foundation::core::{ElementId, Progress, Rect};
use crate::foundation::error::{MorphError, MorphResult};
use crate::scroll::window::ScrollWindow;

/// Pull-based viewport tracker.
///
/// The host registers elements with [`ScrollTracker::observe`], then on every scroll or
/// resize event hands in fresh bounds and reads back a [`Progress`]. Nothing is cached between
/// calls; [`ScrollTracker::unobserve`] drops the registration so a torn-down element can no
/// longer be sampled.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    viewport_height: f64,
    windows: BTreeMap<ElementId, ScrollWindow>,
}

impl ScrollTracker {
    /// Tracker for a viewport of the given height.
    pub fn new(viewport_height: f64) -> MorphResult<Self> {
        validate_viewport(viewport_height)?;
        Ok(Self {
            viewport_height,
            windows: BTreeMap::new(),
        })
    }

    /// Current viewport height in px.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Update the viewport height after a resize.
    pub fn set_viewport_height(&mut self, viewport_height: f64) -> MorphResult<()> {
        validate_viewport(viewport_height)?;
        self.viewport_height = viewport_height;
        Ok(())
    }

    /// Start tracking `id` over `window`, replacing any previous window for it.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn observe(&mut self, id: ElementId, window: ScrollWindow) {
        if self.windows.insert(id, window).is_some() {
            tracing::debug!(?id, "replaced scroll window");
        }
    }

    /// Stop tracking `id`. Returns `false` if it was not observed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn unobserve(&mut self, id: ElementId) -> bool {
        self.windows.remove(&id).is_some()
    }

    /// `true` while `id` is observed.
    pub fn is_observed(&self, id: ElementId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Number of observed elements.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// `true` when nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Progress of `id` given its current viewport-relative bounds, or `None` once it has been
    /// unobserved.
    pub fn sample(&self, id: ElementId, bounds: Rect) -> Option<Progress> {
        let window = self.windows.get(&id)?;
        Some(window.sample(bounds, self.viewport_height))
    }
}

fn validate_viewport(viewport_height: f64) -> MorphResult<()> {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return Err(MorphError::config(format!(
            "viewport height must be finite and > 0, got {viewport_height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
