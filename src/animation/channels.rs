use std::collections::BTreeMap;

use crate::{
    animation::curve::Curve,
    foundation::core::Progress,
    foundation::error::{MorphError, MorphResult},
};

/// Independently interpolated animation output.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Opacity of the first (outgoing) layer.
    OpacityA,
    /// Opacity of the second (incoming) layer.
    OpacityB,
    /// Uniform scale of the container.
    Scale,
    /// Vertical container offset in px.
    #[serde(alias = "translateY")]
    TranslateY,
    /// Horizontal offset in px (parallax text).
    #[serde(alias = "translateX")]
    TranslateX,
    /// Text glow intensity (shadow alpha).
    Glow,
}

impl Channel {
    /// Every channel, in key order.
    pub const ALL: [Channel; 6] = [
        Channel::OpacityA,
        Channel::OpacityB,
        Channel::Scale,
        Channel::TranslateY,
        Channel::TranslateX,
        Channel::Glow,
    ];

    /// Stable snake_case name, matching the serialized key.
    pub fn name(self) -> &'static str {
        match self {
            Self::OpacityA => "opacity_a",
            Self::OpacityB => "opacity_b",
            Self::Scale => "scale",
            Self::TranslateY => "translate_y",
            Self::TranslateX => "translate_x",
            Self::Glow => "glow",
        }
    }

    /// Value a consumer should assume when the channel is not defined.
    pub fn rest_value(self) -> f64 {
        match self {
            Self::OpacityA | Self::Scale => 1.0,
            Self::OpacityB | Self::TranslateY | Self::TranslateX | Self::Glow => 0.0,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Channel {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .or(match s {
                "translateY" => Some(Channel::TranslateY),
                "translateX" => Some(Channel::TranslateX),
                _ => None,
            })
            .ok_or_else(|| MorphError::config(format!("unknown channel '{s}'")))
    }
}

/// Curves keyed by channel.
///
/// Deserializes from a map of channel name to curve. A channel given twice (including under
/// its camelCase alias) is a configuration error rather than last-one-wins.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ChannelDefs {
    curves: BTreeMap<Channel, Curve>,
}

impl ChannelDefs {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ChannelDefs::insert`].
    pub fn with(mut self, channel: Channel, curve: Curve) -> Self {
        self.insert(channel, curve);
        self
    }

    /// Define a channel from `(progress, value)` pairs, validating eagerly.
    pub fn with_pairs(self, channel: Channel, pairs: &[(f64, f64)]) -> MorphResult<Self> {
        let curve = Curve::from_pairs(pairs)
            .map_err(|e| MorphError::config(format!("channel '{channel}': {e}")))?;
        Ok(self.with(channel, curve))
    }

    /// Define or replace a channel, returning the previous curve.
    pub fn insert(&mut self, channel: Channel, curve: Curve) -> Option<Curve> {
        self.curves.insert(channel, curve)
    }

    /// Curve for `channel`, if defined.
    pub fn get(&self, channel: Channel) -> Option<&Curve> {
        self.curves.get(&channel)
    }

    /// Number of defined channels.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// `true` when no channel is defined.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Defined channels with their curves.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Curve)> {
        self.curves.iter().map(|(c, curve)| (*c, curve))
    }

    /// Evaluate every channel at `progress`.
    pub fn evaluate(&self, progress: f64) -> OutputChannelSet {
        evaluate_set(progress, self)
    }

    /// Evaluate at `steps + 1` evenly spaced progress values covering `[0, 1]`.
    pub fn table(&self, steps: u32) -> MorphResult<Vec<(f64, OutputChannelSet)>> {
        if steps == 0 {
            return Err(MorphError::validation("table needs at least 1 step, got 0"));
        }
        Ok((0..=steps)
            .map(|i| {
                let p = f64::from(i) / f64::from(steps);
                (p, self.evaluate(p))
            })
            .collect())
    }
}

impl<'de> serde::Deserialize<'de> for ChannelDefs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DefsVisitor;

        impl<'de> serde::de::Visitor<'de> for DefsVisitor {
            type Value = ChannelDefs;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of channel name to curve")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut map: A,
            ) -> Result<ChannelDefs, A::Error> {
                let mut curves = BTreeMap::new();
                while let Some((channel, curve)) = map.next_entry::<Channel, Curve>()? {
                    if curves.insert(channel, curve).is_some() {
                        return Err(serde::de::Error::custom(MorphError::config(format!(
                            "duplicate channel '{channel}'"
                        ))));
                    }
                }
                Ok(ChannelDefs { curves })
            }
        }

        deserializer.deserialize_map(DefsVisitor)
    }
}

impl FromIterator<(Channel, Curve)> for ChannelDefs {
    fn from_iter<I: IntoIterator<Item = (Channel, Curve)>>(iter: I) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}

/// Interpolated channel values for one progress sample.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OutputChannelSet {
    values: BTreeMap<Channel, f64>,
}

impl OutputChannelSet {
    /// Value of `channel`, if it was defined.
    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.values.get(&channel).copied()
    }

    /// Value of `channel`, or its [`Channel::rest_value`].
    pub fn get_or_rest(&self, channel: Channel) -> f64 {
        self.get(channel).unwrap_or_else(|| channel.rest_value())
    }

    /// Number of channels present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no channel is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(channel, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        self.values.iter().map(|(c, v)| (*c, *v))
    }
}

/// Evaluate each curve of `defs` independently at `progress`.
pub fn evaluate_set(progress: f64, defs: &ChannelDefs) -> OutputChannelSet {
    OutputChannelSet {
        values: defs
            .curves
            .iter()
            .map(|(channel, curve)| (*channel, curve.evaluate(progress)))
            .collect(),
    }
}

/// [`evaluate_set`] at a tracked [`Progress`].
pub fn sample_set(progress: Progress, defs: &ChannelDefs) -> OutputChannelSet {
    evaluate_set(progress.get(), defs)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/channels.rs"]
mod tests;
