use crate::foundation::core::{Progress, Rect};
use crate::foundation::error::{MorphError, MorphResult};
use crate::scroll::visibility::VisibilityLatch;

/// Count-up number: climbs linearly from 0 to `end` over `duration_ms`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountUp {
    /// Final value.
    pub end: u64,
    /// Animation length in ms.
    #[serde(default = "CountUp::default_duration_ms")]
    pub duration_ms: f64,
    /// Text appended to the number, e.g. `"+"` or `"M"`.
    #[serde(default)]
    pub suffix: String,
}

impl CountUp {
    /// Default animation length.
    pub const DEFAULT_DURATION_MS: f64 = 2000.0;

    fn default_duration_ms() -> f64 {
        Self::DEFAULT_DURATION_MS
    }

    /// Counter with the default duration and no suffix.
    pub fn new(end: u64) -> Self {
        Self {
            end,
            duration_ms: Self::DEFAULT_DURATION_MS,
            suffix: String::new(),
        }
    }

    /// Builder for the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Builder for the duration.
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Reject negative or non-finite durations.
    pub fn validate(&self) -> MorphResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(MorphError::config(format!(
                "count-up duration must be finite and >= 0, got {}",
                self.duration_ms
            )));
        }
        Ok(())
    }

    /// Time progress after `elapsed_ms`. A zero duration is complete immediately.
    pub fn progress_at(&self, elapsed_ms: f64) -> Progress {
        if self.duration_ms <= 0.0 {
            return Progress::END;
        }
        Progress::ratio(elapsed_ms, self.duration_ms)
    }

    /// Displayed value after `elapsed_ms`: `floor(progress * end)`.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let p = self.progress_at(elapsed_ms).get();
        if p >= 1.0 {
            return self.end;
        }
        (p * self.end as f64).floor() as u64
    }

    /// Value followed by the suffix.
    pub fn label_at(&self, elapsed_ms: f64) -> String {
        format!("{}{}", self.value_at(elapsed_ms), self.suffix)
    }
}

/// A [`CountUp`] bound to an element: waits until it is visible, then runs off frame
/// timestamps.
#[derive(Clone, Debug)]
pub struct CountUpRun {
    counter: CountUp,
    latch: VisibilityLatch,
    started_at_ms: Option<f64>,
    value: u64,
}

impl CountUpRun {
    /// Run that starts once [`VisibilityLatch::DEFAULT_THRESHOLD`] of the element is visible.
    pub fn new(counter: CountUp) -> MorphResult<Self> {
        Self::with_latch(counter, VisibilityLatch::default())
    }

    /// Run gated by a custom latch.
    pub fn with_latch(counter: CountUp, latch: VisibilityLatch) -> MorphResult<Self> {
        counter.validate()?;
        Ok(Self {
            counter,
            latch,
            started_at_ms: None,
            value: 0,
        })
    }

    /// Feed a visibility observation. Returns `true` when this call made the element visible.
    pub fn observe(&mut self, bounds: Rect, viewport_height: f64) -> bool {
        let fired = self.latch.update_from_bounds(bounds, viewport_height);
        if fired {
            tracing::debug!(end = self.counter.end, "count-up became visible");
        }
        fired
    }

    /// Advance to the frame timestamp `now_ms` and return the current value.
    ///
    /// Frames before visibility keep the value at 0. The first frame after visibility
    /// becomes the start time.
    pub fn frame(&mut self, now_ms: f64) -> u64 {
        if !self.latch.is_fired() {
            return self.value;
        }
        let start = *self.started_at_ms.get_or_insert(now_ms);
        self.value = self.counter.value_at(now_ms - start);
        self.value
    }

    /// Latest value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Latest value with the suffix.
    pub fn label(&self) -> String {
        format!("{}{}", self.value, self.counter.suffix)
    }

    /// `true` once the counter has reached its end value.
    pub fn is_finished(&self) -> bool {
        self.started_at_ms.is_some() && self.value == self.counter.end
    }

    /// `true` while more frames are needed.
    pub fn wants_frame(&self) -> bool {
        self.latch.is_fired() && !self.is_finished()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/counter.rs"]
mod tests;
