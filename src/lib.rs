//! scrollmorph maps scroll progress to animation parameters for stacked UI layers.
//!
//! The core is a piecewise-linear interpolator: a [`Curve`] of breakpoints is evaluated at a
//! normalized [`Progress`] and a [`ChannelDefs`] evaluates several curves at once into an
//! [`OutputChannelSet`]. Around it sit the pieces a host UI needs to drive it:
//!
//! - [`ScrollTracker`] / [`ScrollWindow`] turn element bounds into progress (pull-based, no
//!   subscriptions)
//! - [`CrossfadeSection`] combines channel values with hover state into per-layer styles
//! - [`CountUpRun`] runs a visibility-triggered count-up number
//! - [`SceneConfig`] loads all of the above from JSON
#![forbid(unsafe_code)]

pub mod animation;
pub mod effects;
mod foundation;
pub mod scene;
pub mod scroll;

pub use crate::animation::channels::{
    Channel, ChannelDefs, OutputChannelSet, evaluate_set, sample_set,
};
pub use crate::animation::curve::{Breakpoint, Curve, evaluate};
pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::Lerp;
pub use crate::effects::counter::{CountUp, CountUpRun};
pub use crate::effects::crossfade::{CrossfadeFrame, CrossfadeSection, Layer, RevealPolicy};
pub use crate::effects::hover::{HoverState, HoverTargets, HoverTransition, LayerStyle};
pub use crate::effects::text::{GlowShadow, GlowText, ParallaxText};
pub use crate::foundation::core::{ElementId, Progress, Rect};
pub use crate::foundation::error::{MorphError, MorphResult};
pub use crate::scene::config::{Scene, SceneConfig};
pub use crate::scroll::tracker::ScrollTracker;
pub use crate::scroll::visibility::{VisibilityLatch, intersection_ratio};
pub use crate::scroll::window::{ScrollOffset, ScrollWindow};
