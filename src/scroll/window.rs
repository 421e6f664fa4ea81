use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Progress, Rect};
use crate::foundation::error::{MorphError, MorphResult};

/// A point where an edge of the tracked element meets an edge of the viewport.
///
/// Written as `"<target> <container>"`, e.g. `"start end"`: the element's start (top) meets the
/// viewport's end (bottom). Each edge is `start` (0), `center` (0.5), `end` (1), a fraction
/// such as `0.25`, or a percentage such as `25%`. A single token applies to both sides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollOffset {
    /// Fraction along the element's height.
    pub target: f64,
    /// Fraction along the viewport's height.
    pub container: f64,
}

impl ScrollOffset {
    /// Element top meets viewport bottom.
    pub const START_END: Self = Self::new(0.0, 1.0);
    /// Element bottom meets viewport top.
    pub const END_START: Self = Self::new(1.0, 0.0);

    /// Build from raw fractions.
    pub const fn new(target: f64, container: f64) -> Self {
        Self { target, container }
    }

    /// Parse the `"<target> <container>"` notation.
    pub fn parse(s: &str) -> MorphResult<Self> {
        let mut tokens = s.split_whitespace();
        let Some(first) = tokens.next() else {
            return Err(MorphError::config("scroll offset is empty"));
        };
        let target = parse_edge(first)?;
        let container = match tokens.next() {
            Some(tok) => parse_edge(tok)?,
            None => target,
        };
        if tokens.next().is_some() {
            return Err(MorphError::config(format!(
                "scroll offset '{s}' has more than two edges"
            )));
        }
        Ok(Self { target, container })
    }

    // Element top (relative to viewport top) at which this intersection happens.
    fn top_at(self, viewport_height: f64, element_height: f64) -> f64 {
        self.container * viewport_height - self.target * element_height
    }
}

fn parse_edge(tok: &str) -> MorphResult<f64> {
    let v = match tok {
        "start" => 0.0,
        "center" => 0.5,
        "end" => 1.0,
        _ => {
            let (num, scale) = match tok.strip_suffix('%') {
                Some(num) => (num, 0.01),
                None => (tok, 1.0),
            };
            let v: f64 = num
                .parse()
                .map_err(|_| MorphError::config(format!("unknown scroll edge '{tok}'")))?;
            v * scale
        }
    };
    if !v.is_finite() {
        return Err(MorphError::config(format!("scroll edge '{tok}' is not finite")));
    }
    Ok(v)
}

impl FromStr for ScrollOffset {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ScrollOffset {
    type Error = MorphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ScrollOffset> for String {
    fn from(o: ScrollOffset) -> Self {
        o.to_string()
    }
}

impl fmt::Display for ScrollOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn edge(v: f64) -> String {
            if v == 0.0 {
                "start".to_owned()
            } else if v == 0.5 {
                "center".to_owned()
            } else if v == 1.0 {
                "end".to_owned()
            } else {
                v.to_string()
            }
        }
        write!(f, "{} {}", edge(self.target), edge(self.container))
    }
}

/// The stretch of scrolling over which an element's progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[ScrollOffset; 2]", into = "[ScrollOffset; 2]")]
pub struct ScrollWindow {
    /// Intersection at which progress is 0.
    pub start: ScrollOffset,
    /// Intersection at which progress is 1.
    pub end: ScrollOffset,
}

impl Default for ScrollWindow {
    /// `["start end", "end start"]`: from first pixel visible to last pixel gone.
    fn default() -> Self {
        Self {
            start: ScrollOffset::START_END,
            end: ScrollOffset::END_START,
        }
    }
}

impl From<[ScrollOffset; 2]> for ScrollWindow {
    fn from([start, end]: [ScrollOffset; 2]) -> Self {
        Self { start, end }
    }
}

impl From<ScrollWindow> for [ScrollOffset; 2] {
    fn from(w: ScrollWindow) -> Self {
        [w.start, w.end]
    }
}

impl ScrollWindow {
    /// Parse both intersections, e.g. `ScrollWindow::parse("start end", "end start")`.
    pub fn parse(start: &str, end: &str) -> MorphResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Scroll distance in px between the two intersections for the given geometry.
    pub fn span(&self, viewport_height: f64, element_height: f64) -> f64 {
        self.start.top_at(viewport_height, element_height)
            - self.end.top_at(viewport_height, element_height)
    }

    /// Progress of an element whose bounds are given relative to the viewport's top-left.
    ///
    /// The result is clamped to `[0, 1]`. A zero-length window reports 0 until the
    /// intersection point and 1 from then on.
    pub fn sample(&self, bounds: Rect, viewport_height: f64) -> Progress {
        let bounds = bounds.abs();
        let h = bounds.height();
        let top = bounds.y0;
        let top_start = self.start.top_at(viewport_height, h);
        let span = self.span(viewport_height, h);
        if span == 0.0 {
            return if top > top_start {
                Progress::START
            } else {
                Progress::END
            };
        }
        Progress::new((top_start - top) / span)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/window.rs"]
mod tests;
