use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::animation::channels::ChannelDefs;
use crate::animation::ease::Ease;
use crate::effects::crossfade::{CrossfadeSection, RevealPolicy};
use crate::effects::hover::{HoverTargets, HoverTransition};
use crate::foundation::error::{MorphError, MorphResult};
use crate::scene::preset;
use crate::scroll::window::ScrollWindow;

/// JSON description of a crossfade section.
///
/// Every field is optional; omitted sections fall back to the Khan Shatyr preset. Curves are
/// validated while parsing, so a malformed breakpoint list fails the load rather than the
/// first frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<ScrollWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<ChannelDefs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior: Option<HoverTargets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior: Option<HoverTargets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_ease: Option<Ease>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<HoverTargets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_ms: Option<f64>,
}

/// A fully resolved scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub window: ScrollWindow,
    pub section: CrossfadeSection,
    pub hover: HoverTransition,
    /// Separate, slower transition for the section's overlay layer.
    pub overlay_hover: HoverTransition,
}

impl SceneConfig {
    /// Parse scene JSON.
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        serde_json::from_str(s).map_err(|e| MorphError::serde(e.to_string()))
    }

    /// Read and parse a scene file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> MorphResult<Self> {
        let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| MorphError::serde(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            channels = cfg.channels.as_ref().map_or(0, ChannelDefs::len),
            "loaded scene"
        );
        Ok(cfg)
    }

    /// Fill omitted fields from the preset and build the runtime scene.
    pub fn resolve(self) -> MorphResult<Scene> {
        let channels = match self.channels {
            Some(channels) => channels,
            None => preset::khan_shatyr_channels()?,
        };
        let ease = self.hover_ease.unwrap_or(Ease::EaseInOut);
        let hover = HoverTransition::new(
            self.hover_ms.unwrap_or(HoverTransition::DEFAULT_DURATION_MS),
            ease,
        )?;
        let overlay_hover = HoverTransition::new(
            self.overlay_ms.unwrap_or(preset::KHAN_SHATYR_OVERLAY_MS),
            ease,
        )?;
        Ok(Scene {
            window: self.window.unwrap_or_default(),
            section: CrossfadeSection {
                channels,
                exterior: self.exterior.unwrap_or_else(preset::khan_shatyr_exterior),
                interior: self.interior.unwrap_or_else(preset::khan_shatyr_interior),
                reveal: self.reveal.unwrap_or_default(),
                overlay: Some(self.overlay.unwrap_or_else(preset::khan_shatyr_overlay)),
            },
            hover,
            overlay_hover,
        })
    }
}

impl Scene {
    /// Khan Shatyr preset with the default window and hover transition.
    pub fn preset() -> MorphResult<Self> {
        SceneConfig::default().resolve()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
