use crate::animation::{ease::Ease, lerp::Lerp};
use crate::foundation::error::{MorphError, MorphResult};

/// Pointer state over an element, toggled by enter/leave events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverState {
    /// Pointer outside.
    #[default]
    Rest,
    /// Pointer inside.
    Hovered,
}

impl HoverState {
    /// `Hovered` when the pointer is inside.
    pub fn from_pointer_inside(inside: bool) -> Self {
        if inside { Self::Hovered } else { Self::Rest }
    }

    /// `true` for [`HoverState::Hovered`].
    pub fn is_hovered(self) -> bool {
        self == Self::Hovered
    }

    /// Flip between rest and hovered.
    pub fn toggled(self) -> Self {
        match self {
            Self::Rest => Self::Hovered,
            Self::Hovered => Self::Rest,
        }
    }

    /// Weight this state settles at: 0 for rest, 1 for hovered.
    pub fn target_weight(self) -> f64 {
        match self {
            Self::Rest => 0.0,
            Self::Hovered => 1.0,
        }
    }
}

/// Visual parameters of one layer, as handed to the render layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Gaussian blur radius in px.
    pub blur_px: f64,
    /// Brightness multiplier.
    pub brightness: f64,
}

impl LayerStyle {
    /// Fully visible, unscaled, unfiltered.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        blur_px: 0.0,
        brightness: 1.0,
    };

    /// Copy with a different opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for LayerStyle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            blur_px: <f64 as Lerp>::lerp(&a.blur_px, &b.blur_px, t),
            brightness: <f64 as Lerp>::lerp(&a.brightness, &b.brightness, t),
        }
    }
}

/// Discrete rest/hovered targets for one layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverTargets {
    /// Style with the pointer outside.
    #[serde(default)]
    pub rest: LayerStyle,
    /// Style with the pointer inside.
    #[serde(default)]
    pub hovered: LayerStyle,
}

impl HoverTargets {
    /// Blend between `rest` (weight 0) and `hovered` (weight 1). Weight is clamped.
    pub fn resolve(&self, weight: f64) -> LayerStyle {
        let w = if weight.is_nan() {
            0.0
        } else {
            weight.clamp(0.0, 1.0)
        };
        LayerStyle::lerp(&self.rest, &self.hovered, w)
    }

    /// Direct override: `hovered` when hovered, `rest` otherwise.
    pub fn pick(&self, state: HoverState) -> LayerStyle {
        if state.is_hovered() {
            self.hovered
        } else {
            self.rest
        }
    }

    /// Largest blur of the two targets.
    pub fn max_blur_px(&self) -> f64 {
        self.rest.blur_px.max(self.hovered.blur_px)
    }
}

/// Eased hover weight that moves toward the current [`HoverState`] over a fixed duration.
///
/// Reversing mid-way continues from the current weight, so quick enter/leave sequences never
/// jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTransition {
    duration_ms: f64,
    ease: Ease,
    linear: f64, // un-eased weight in [0, 1]
}

impl HoverTransition {
    /// Transition length used by the landmark sections.
    pub const DEFAULT_DURATION_MS: f64 = 800.0;

    /// Start at rest. `duration_ms` must be finite and `>= 0`; zero snaps instantly.
    pub fn new(duration_ms: f64, ease: Ease) -> MorphResult<Self> {
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(MorphError::config(format!(
                "hover transition duration must be finite and >= 0, got {duration_ms}"
            )));
        }
        ease.validate()?;
        Ok(Self {
            duration_ms,
            ease,
            linear: 0.0,
        })
    }

    /// Advance by `dt_ms` toward `state` and return the eased weight.
    pub fn tick(&mut self, state: HoverState, dt_ms: f64) -> f64 {
        let target = state.target_weight();
        if self.duration_ms == 0.0 {
            self.linear = target;
        } else {
            let step = (dt_ms.max(0.0) / self.duration_ms).min(1.0);
            self.linear = if target > self.linear {
                (self.linear + step).min(target)
            } else {
                (self.linear - step).max(target)
            };
        }
        self.weight()
    }

    /// Current eased weight in `[0, 1]`.
    pub fn weight(&self) -> f64 {
        self.ease.apply(self.linear)
    }

    /// `true` once the weight has reached `state`'s target.
    pub fn is_settled(&self, state: HoverState) -> bool {
        self.linear == state.target_weight()
    }
}

impl Default for HoverTransition {
    fn default() -> Self {
        Self {
            duration_ms: Self::DEFAULT_DURATION_MS,
            ease: Ease::EaseInOut,
            linear: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/hover.rs"]
mod tests;
