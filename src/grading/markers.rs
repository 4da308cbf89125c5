//! Fixed marker tables.
//!
//! Each table is an ordered list of line prefixes; the position of a marker
//! in its table is the slot its value lands in.

use serde::Serialize;

/// An ordered, immutable set of line-start markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSet {
    markers: &'static [&'static str],
}

impl MarkerSet {
    pub const fn new(markers: &'static [&'static str]) -> Self {
        Self { markers }
    }

    pub const fn len(&self) -> usize {
        self.markers.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Marker at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.markers.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.markers.iter().copied()
    }

    /// The same set with its final marker dropped.
    ///
    /// Assignment 3 scores only `i.` through `vi.`, with `vi.` acting as
    /// the weight.
    pub fn without_last(&self) -> Self {
        match self.markers.split_last() {
            Some((_, rest)) => Self { markers: rest },
            None => *self,
        }
    }

    /// First marker that prefixes `line`, with its slot index.
    pub fn matching(&self, line: &str) -> Option<(usize, &'static str)> {
        self.markers
            .iter()
            .enumerate()
            .find(|(_, marker)| line.starts_with(**marker))
            .map(|(idx, marker)| (idx, *marker))
    }
}

/// Roman-numeral quality criteria; `vii.` is the weighting factor.
pub const QUALITY_MARKERS: MarkerSet =
    MarkerSet::new(&["i.", "ii.", "iii.", "iv.", "v.", "vi.", "vii."]);

/// Test scenarios for the five-scenario Assignment 3 rubric.
pub const TEST_MARKERS_FIVE: MarkerSet = MarkerSet::new(&[
    "Scenario 1",
    "Scenario 2",
    "Scenario 3",
    "Scenario 4",
    "Scenario 5",
]);

/// Test scenarios for the six-scenario Assignment 3 rubric.
pub const TEST_MARKERS_SIX: MarkerSet = MarkerSet::new(&[
    "Scenario 1",
    "Scenario 2",
    "Scenario 3",
    "Scenario 4",
    "Scenario 5",
    "Scenario 6",
]);

/// Overall grade lines at the foot of a feedback file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeLine {
    Testing,
    Usability,
    Quality,
}

impl GradeLine {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Testing => "Testing:",
            Self::Usability => "Usability:",
            Self::Quality => "Quality:",
        }
    }

    /// Lowercase name used in diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Testing => "testing",
            Self::Usability => "usability",
            Self::Quality => "quality",
        }
    }
}
