use crate::animation::channels::{Channel, ChannelDefs};
use crate::animation::curve::Curve;
use crate::foundation::core::Progress;
use crate::foundation::error::{MorphError, MorphResult};

/// Two-layer cyan/blue text glow parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowShadow {
    /// Inner shadow blur radius in px.
    pub inner_radius_px: f64,
    /// Inner shadow alpha.
    pub inner_alpha: f64,
    /// Outer shadow blur radius in px.
    pub outer_radius_px: f64,
    /// Outer shadow alpha.
    pub outer_alpha: f64,
}

/// Heading glow that swells while the heading crosses the middle of its scroll window.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowText {
    intensity: f64,
    channels: ChannelDefs,
}

impl GlowText {
    /// Default peak alpha.
    pub const DEFAULT_INTENSITY: f64 = 0.3;
    const INNER_RADIUS_PX: f64 = 20.0;
    const OUTER_RADIUS_PX: f64 = 40.0;

    /// Glow peaking at `intensity` (alpha in `[0, 1]`) halfway through the window.
    pub fn new(intensity: f64) -> MorphResult<Self> {
        if !(0.0..=1.0).contains(&intensity) {
            return Err(MorphError::config(format!(
                "glow intensity must be in [0, 1], got {intensity}"
            )));
        }
        let channels =
            ChannelDefs::new().with_pairs(Channel::Glow, &[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)])?;
        Ok(Self {
            intensity,
            channels,
        })
    }

    /// Scroll curves driving the glow.
    pub fn channels(&self) -> &ChannelDefs {
        &self.channels
    }

    /// Shadow parameters at `progress`.
    pub fn shadow(&self, progress: Progress) -> GlowShadow {
        let f = self
            .channels
            .evaluate(progress.get())
            .get_or_rest(Channel::Glow);
        GlowShadow {
            inner_radius_px: Self::INNER_RADIUS_PX * f,
            inner_alpha: self.intensity * f,
            outer_radius_px: Self::OUTER_RADIUS_PX * f,
            outer_alpha: self.intensity * 0.5 * f,
        }
    }
}

/// Marquee text that slides horizontally with absolute page scroll.
///
/// Unlike the other effects this is keyed on raw `scroll_y` in px, not on window progress:
/// the first [`ParallaxText::SCROLL_RANGE_PX`] of scrolling move the text by
/// `base_velocity * SCROLL_RANGE_PX`, and it holds still after that.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxText {
    curve: Curve,
}

impl ParallaxText {
    /// Scroll distance over which the text moves.
    pub const SCROLL_RANGE_PX: f64 = 1000.0;

    /// Text moving `base_velocity` px per px scrolled; a non-finite velocity is a `Config` error.
    pub fn new(base_velocity: f64) -> MorphResult<Self> {
        let curve = Curve::from_pairs(&[
            (0.0, 0.0),
            (Self::SCROLL_RANGE_PX, base_velocity * Self::SCROLL_RANGE_PX),
        ])
        .map_err(|e| MorphError::config(format!("parallax text: {e}")))?;
        Ok(Self { curve })
    }

    /// Horizontal offset in px at page scroll `scroll_y`.
    pub fn offset(&self, scroll_y: f64) -> f64 {
        self.curve.evaluate(scroll_y)
    }

    /// The same mapping as a `translate_x` channel keyed on px.
    pub fn channels(&self) -> ChannelDefs {
        ChannelDefs::new().with(Channel::TranslateX, self.curve.clone())
    }
}
