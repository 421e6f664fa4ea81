pub use kurbo::Rect;

/// Normalized traversal of a tracked element through its scroll window.
///
/// `0.0` means the element is just entering the window, `1.0` means it has fully exited.
/// Values are always finite and inside `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Window entry.
    pub const START: Self = Self(0.0);
    /// Window exit.
    pub const END: Self = Self(1.0);

    /// Clamp `raw` into `[0, 1]`. NaN maps to `0`.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// Ratio `num / den`, clamped. A zero denominator yields `0`.
    pub fn ratio(num: f64, den: f64) -> Self {
        if den == 0.0 {
            return Self::START;
        }
        Self::new(num / den)
    }

    /// The underlying scalar.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

impl<'de> serde::Deserialize<'de> for Progress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Caller-chosen identifier for an element observed by a [`crate::ScrollTracker`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u64);
