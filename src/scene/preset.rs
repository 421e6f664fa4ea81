//! Curves and hover targets of the landmark sections, ready to use.

use crate::animation::channels::{Channel, ChannelDefs};
use crate::effects::crossfade::{CrossfadeSection, RevealPolicy};
use crate::effects::hover::{HoverTargets, LayerStyle};
use crate::foundation::error::MorphResult;

/// Scroll curves of the Khan Shatyr exterior/interior crossfade.
pub fn khan_shatyr_channels() -> MorphResult<ChannelDefs> {
    ChannelDefs::new()
        .with_pairs(Channel::OpacityA, &[(0.0, 1.0), (0.3, 1.0), (0.5, 0.0)])?
        .with_pairs(Channel::OpacityB, &[(0.3, 0.0), (0.5, 1.0), (0.8, 1.0)])?
        .with_pairs(Channel::Scale, &[(0.0, 0.8), (0.5, 1.0), (1.0, 1.1)])?
        .with_pairs(Channel::TranslateY, &[(0.0, 100.0), (1.0, -100.0)])
}

/// Exterior sharpens at rest and blurs, dims and zooms in on hover.
pub fn khan_shatyr_exterior() -> HoverTargets {
    HoverTargets {
        rest: LayerStyle::IDENTITY,
        hovered: LayerStyle {
            opacity: 1.0,
            scale: 1.08,
            blur_px: 15.0,
            brightness: 0.8,
        },
    }
}

/// Interior is blurred, dimmed and shrunk at rest and comes into focus on hover.
pub fn khan_shatyr_interior() -> HoverTargets {
    HoverTargets {
        rest: LayerStyle {
            opacity: 1.0,
            scale: 0.92,
            blur_px: 15.0,
            brightness: 0.8,
        },
        hovered: LayerStyle::IDENTITY,
    }
}

/// Transition length of the overlay, slower than the two main layers.
pub const KHAN_SHATYR_OVERLAY_MS: f64 = 1200.0;

/// Overlay is heavily blurred at rest and sharpens while zooming in on hover.
pub fn khan_shatyr_overlay() -> HoverTargets {
    HoverTargets {
        rest: LayerStyle {
            blur_px: 20.0,
            ..LayerStyle::IDENTITY
        },
        hovered: LayerStyle {
            scale: 1.1,
            ..LayerStyle::IDENTITY
        },
    }
}

/// Full Khan Shatyr section: scroll crossfade plus hover focus.
pub fn khan_shatyr() -> MorphResult<CrossfadeSection> {
    Ok(CrossfadeSection {
        channels: khan_shatyr_channels()?,
        exterior: khan_shatyr_exterior(),
        interior: khan_shatyr_interior(),
        reveal: RevealPolicy::Both,
        overlay: Some(khan_shatyr_overlay()),
    })
}
