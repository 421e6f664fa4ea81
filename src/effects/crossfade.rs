use crate::animation::channels::{Channel, ChannelDefs, OutputChannelSet};
use crate::effects::hover::{HoverTargets, LayerStyle};
use crate::foundation::core::Progress;

/// Which input reveals the second (interior) layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Scroll alone crossfades; hover is ignored.
    Scroll,
    /// Hover alone crossfades; scroll still drives the container transform.
    Hover,
    /// Scroll drives opacity, hover drives blur, brightness and layer scale.
    #[default]
    Both,
}

/// Which layer the render layer should stack on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// First image (e.g. the exterior view).
    Exterior,
    /// Second image (e.g. the interior view).
    Interior,
}

/// Everything needed to draw one frame of a crossfade section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CrossfadeFrame {
    /// Container scale.
    pub scale: f64,
    /// Container vertical offset in px.
    pub translate_y: f64,
    /// First layer.
    pub exterior: LayerStyle,
    /// Second layer.
    pub interior: LayerStyle,
    /// Layer drawn on top of the crossfaded pair.
    pub top: Layer,
    /// Optional highlight layer drawn above both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<LayerStyle>,
}

/// Two stacked layers crossfaded by scroll progress and/or hover.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CrossfadeSection {
    /// Scroll-driven curves; `opacity_a`, `opacity_b`, `scale` and `translate_y` are read.
    pub channels: ChannelDefs,
    /// Hover targets of the first layer.
    pub exterior: HoverTargets,
    /// Hover targets of the second layer.
    pub interior: HoverTargets,
    /// How scroll and hover combine.
    #[serde(default)]
    pub reveal: RevealPolicy,
    /// Hover targets of an extra layer stacked above both; it fades in with `opacity_b`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<HoverTargets>,
}

impl CrossfadeSection {
    /// Frame at `progress` with the current hover weight (0 = rest, 1 = hovered).
    pub fn frame(&self, progress: Progress, hover_weight: f64) -> CrossfadeFrame {
        let out = self.channels.evaluate(progress.get());
        self.compose(&out, hover_weight)
    }

    /// Combine an already evaluated channel set with the hover weight.
    ///
    /// The overlay, if any, shares `hover_weight`; use [`CrossfadeSection::overlay_style`] to
    /// drive it from its own transition.
    pub fn compose(&self, out: &OutputChannelSet, hover_weight: f64) -> CrossfadeFrame {
        let w = clamp_weight(hover_weight);
        let opacity_a = out.get_or_rest(Channel::OpacityA).clamp(0.0, 1.0);
        let opacity_b = out.get_or_rest(Channel::OpacityB).clamp(0.0, 1.0);

        let (exterior, interior) = match self.reveal {
            RevealPolicy::Scroll => (
                scroll_only(&self.exterior, opacity_a),
                scroll_only(&self.interior, opacity_b),
            ),
            RevealPolicy::Hover => (
                self.exterior.resolve(w).with_opacity(1.0 - w),
                self.interior.resolve(w).with_opacity(w),
            ),
            RevealPolicy::Both => (
                scroll_and_hover(&self.exterior, opacity_a, w),
                scroll_and_hover(&self.interior, opacity_b, w),
            ),
        };

        let hover_drives_top = self.reveal != RevealPolicy::Scroll;
        let top = if hover_drives_top && w >= 0.5 {
            Layer::Interior
        } else if interior.opacity > exterior.opacity {
            Layer::Interior
        } else {
            Layer::Exterior
        };

        CrossfadeFrame {
            scale: out.get_or_rest(Channel::Scale),
            translate_y: out.get_or_rest(Channel::TranslateY),
            exterior,
            interior,
            top,
            overlay: self.overlay_style(out, w),
        }
    }

    /// Style of the overlay layer at `overlay_weight`, or `None` without an overlay.
    ///
    /// The overlay follows the second layer's visibility: `opacity_b` under scroll reveal,
    /// the hover weight under hover reveal, and `opacity_b` times the hovered style under both.
    pub fn overlay_style(
        &self,
        out: &OutputChannelSet,
        overlay_weight: f64,
    ) -> Option<LayerStyle> {
        let targets = self.overlay.as_ref()?;
        let w = clamp_weight(overlay_weight);
        let opacity_b = out.get_or_rest(Channel::OpacityB).clamp(0.0, 1.0);
        Some(match self.reveal {
            RevealPolicy::Scroll => scroll_only(targets, opacity_b),
            RevealPolicy::Hover => targets.resolve(w).with_opacity(w),
            RevealPolicy::Both => scroll_and_hover(targets, opacity_b, w),
        })
    }
}

fn clamp_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, 1.0)
    }
}

fn scroll_and_hover(targets: &HoverTargets, scroll_opacity: f64, weight: f64) -> LayerStyle {
    let style = targets.resolve(weight);
    style.with_opacity(style.opacity * scroll_opacity)
}

// A scroll-hidden layer is also blurred out, proportionally to how transparent it is.
fn scroll_only(targets: &HoverTargets, opacity: f64) -> LayerStyle {
    LayerStyle {
        opacity,
        blur_px: targets.max_blur_px() * (1.0 - opacity),
        ..LayerStyle::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/crossfade.rs"]
mod tests;
