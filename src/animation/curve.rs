use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::core::Progress,
    foundation::error::{MorphError, MorphResult},
};

/// Anchor `(progress, value)` of a piecewise-linear curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Breakpoint {
    /// Position along the scroll window, usually in `[0, 1]`.
    pub progress: f64,
    /// Channel value at `progress`.
    pub value: f64,
}

impl Breakpoint {
    /// Shorthand constructor.
    pub const fn new(progress: f64, value: f64) -> Self {
        Self { progress, value }
    }
}

impl From<(f64, f64)> for Breakpoint {
    fn from((progress, value): (f64, f64)) -> Self {
        Self { progress, value }
    }
}

impl From<Breakpoint> for (f64, f64) {
    fn from(bp: Breakpoint) -> Self {
        (bp.progress, bp.value)
    }
}

/// Validated piecewise-linear curve for one channel.
///
/// Holds at least two breakpoints with finite coordinates and strictly ascending progress, plus
/// one [`Ease`] per segment. The only ways to get a `Curve` go through [`Curve::new`] (directly
/// or via deserialization), so evaluation itself cannot fail.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CurveDef", into = "CurveDef")]
pub struct Curve {
    points: Vec<Breakpoint>,
    eases: Vec<Ease>, // len == points.len() - 1
}

impl Curve {
    /// Build a linear curve, rejecting fewer than two breakpoints, non-finite coordinates, or
    /// progress values that are not strictly ascending.
    pub fn new(points: Vec<Breakpoint>) -> MorphResult<Self> {
        validate_points(&points)?;
        let eases = vec![Ease::Linear; points.len() - 1];
        Ok(Self { points, eases })
    }

    /// [`Curve::new`] from `(progress, value)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> MorphResult<Self> {
        Self::new(pairs.iter().copied().map(Breakpoint::from).collect())
    }

    /// Two-point curve over `[0, 1]`.
    pub fn linear(from: f64, to: f64) -> MorphResult<Self> {
        Self::from_pairs(&[(0.0, from), (1.0, to)])
    }

    /// Curve that evaluates to `value` everywhere.
    pub fn constant(value: f64) -> MorphResult<Self> {
        Self::linear(value, value)
    }

    /// Apply `ease` to every segment.
    pub fn with_ease(mut self, ease: Ease) -> MorphResult<Self> {
        ease.validate()?;
        self.eases.fill(ease);
        Ok(self)
    }

    /// Set one ease per segment; `eases.len()` must equal the segment count.
    pub fn with_segment_eases(mut self, eases: Vec<Ease>) -> MorphResult<Self> {
        if eases.len() != self.eases.len() {
            return Err(MorphError::config(format!(
                "curve has {} segments but {} eases were given",
                self.eases.len(),
                eases.len()
            )));
        }
        for ease in &eases {
            ease.validate()?;
        }
        self.eases = eases;
        Ok(self)
    }

    /// Breakpoints in ascending progress order.
    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    /// Per-segment easing.
    pub fn eases(&self) -> &[Ease] {
        &self.eases
    }

    /// Progress range `[first, last]` covered by breakpoints.
    pub fn domain(&self) -> (f64, f64) {
        (self.points[0].progress, self.points[self.points.len() - 1].progress)
    }

    /// Value at `progress`.
    ///
    /// Inside the domain this interpolates within the enclosing segment. Outside it (and for
    /// NaN, which is treated as "before the start") the nearest endpoint value is returned.
    pub fn evaluate(&self, progress: f64) -> f64 {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        if progress.is_nan() || progress <= first.progress {
            return first.value;
        }
        if progress >= last.progress {
            return last.value;
        }

        // first.progress < progress < last.progress, so 1 <= idx < len.
        let idx = self.points.partition_point(|bp| bp.progress <= progress);
        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let t = (progress - a.progress) / (b.progress - a.progress);
        let te = self.eases[idx - 1].apply(t);
        <f64 as Lerp>::lerp(&a.value, &b.value, te)
    }

    /// [`Curve::evaluate`] at a tracked [`Progress`].
    pub fn sample(&self, progress: Progress) -> f64 {
        self.evaluate(progress.get())
    }
}

/// Free-function form of [`Curve::evaluate`].
pub fn evaluate(progress: f64, curve: &Curve) -> f64 {
    curve.evaluate(progress)
}

fn validate_points(points: &[Breakpoint]) -> MorphResult<()> {
    if points.len() < 2 {
        return Err(MorphError::config(format!(
            "curve needs at least 2 breakpoints, got {}",
            points.len()
        )));
    }
    if let Some(bp) = points
        .iter()
        .find(|bp| !bp.progress.is_finite() || !bp.value.is_finite())
    {
        return Err(MorphError::config(format!(
            "curve breakpoint ({}, {}) is not finite",
            bp.progress, bp.value
        )));
    }
    if let Some(w) = points.windows(2).find(|w| w[0].progress >= w[1].progress) {
        return Err(MorphError::config(format!(
            "curve breakpoints must have strictly ascending progress ({} then {})",
            w[0].progress, w[1].progress
        )));
    }
    Ok(())
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum CurveDef {
    Points(Vec<Breakpoint>),
    Eased {
        points: Vec<Breakpoint>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ease: Option<EaseDef>,
    },
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum EaseDef {
    All(Ease),
    PerSegment(Vec<Ease>),
}

impl TryFrom<CurveDef> for Curve {
    type Error = MorphError;

    fn try_from(def: CurveDef) -> Result<Self, Self::Error> {
        match def {
            CurveDef::Points(points) => Curve::new(points),
            CurveDef::Eased { points, ease } => {
                let curve = Curve::new(points)?;
                match ease {
                    None => Ok(curve),
                    Some(EaseDef::All(ease)) => curve.with_ease(ease),
                    Some(EaseDef::PerSegment(eases)) => curve.with_segment_eases(eases),
                }
            }
        }
    }
}

impl From<Curve> for CurveDef {
    fn from(curve: Curve) -> Self {
        if curve.eases.iter().all(|e| *e == Ease::Linear) {
            return CurveDef::Points(curve.points);
        }
        CurveDef::Eased {
            points: curve.points,
            ease: Some(EaseDef::PerSegment(curve.eases)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
