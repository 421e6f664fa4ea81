use crate::foundation::core::Rect;
use crate::foundation::error::{MorphError, MorphResult};

/// Fraction of the element's height currently inside the viewport.
///
/// Returns 0 for elements with no height.
pub fn intersection_ratio(bounds: Rect, viewport_height: f64) -> f64 {
    let bounds = bounds.abs();
    let h = bounds.height();
    if h <= 0.0 {
        return 0.0;
    }
    let visible = (bounds.y1.min(viewport_height) - bounds.y0.max(0.0)).max(0.0);
    (visible / h).clamp(0.0, 1.0)
}

/// One-shot visibility trigger ("once in view").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    fired: bool,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            fired: false,
        }
    }
}

impl VisibilityLatch {
    /// Ratio at which count-up stats start animating.
    pub const DEFAULT_THRESHOLD: f64 = 0.3;

    /// Latch firing once the intersection ratio reaches `threshold` (in `[0, 1]`).
    pub fn new(threshold: f64) -> MorphResult<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(MorphError::config(format!(
                "visibility threshold must be in [0, 1], got {threshold}"
            )));
        }
        Ok(Self {
            threshold,
            fired: false,
        })
    }

    /// Feed the latest ratio. Returns `true` only on the call that fires the latch.
    ///
    /// An element that is not intersecting at all never fires, even with a zero threshold.
    pub fn update(&mut self, ratio: f64) -> bool {
        if self.fired {
            return false;
        }
        if ratio > 0.0 && ratio >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }

    /// [`VisibilityLatch::update`] from raw geometry.
    pub fn update_from_bounds(&mut self, bounds: Rect, viewport_height: f64) -> bool {
        self.update(intersection_ratio(bounds, viewport_height))
    }

    /// `true` once the latch has fired.
    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
