use crate::foundation::error::{MorphError, MorphResult};

/// Easing applied to segment-local progress.
///
/// The named variants are the CSS/motion cubic beziers, so curves authored against a browser
/// animation library sample identically here.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Arbitrary bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-3;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 40;

impl Ease {
    /// Control points `(x1, y1, x2, y2)`, or `None` for [`Ease::Linear`].
    pub fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Self::CubicBezier { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
        }
    }

    /// Reject beziers whose x control points leave `[0, 1]`; such curves are not functions of x.
    pub fn validate(self) -> MorphResult<()> {
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return Ok(());
        };
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(MorphError::config("cubic bezier control points must be finite"));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(MorphError::config(
                "cubic bezier x control points must lie in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Map `t` (clamped to `[0, 1]`) through this easing.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                if x1 == y1 && x2 == y2 {
                    return t;
                }
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_param_for_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier(s: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * s + b) * s + c) * s
}

fn bezier_slope(s: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    3.0 * a * s * s + 2.0 * b * s + c
}

fn solve_param_for_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        let err = bezier(s, x1, x2) - x;
        if err.abs() < SUBDIVISION_PRECISION {
            return s;
        }
        s -= err / slope;
    }

    // Newton stalled or left the unit interval; bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < SUBDIVISION_PRECISION {
            break;
        }
        if err > 0.0 {
            hi = s;
        } else {
            lo = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
