//! Line scanners that pull marks and legend maxima out of feedback text.

use super::diagnostics::{Diagnostic, Diagnostics, Section};
use super::markers::MarkerSet;

/// One value per marker slot; `None` until the marker's line is found.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkVector {
    slots: Vec<Option<f64>>,
}

/// Per-criterion maxima parsed from legends. Same layout as [`MarkVector`].
pub type MaxMarkVector = MarkVector;

impl MarkVector {
    pub fn empty(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn from_values(values: &[f64]) -> Self {
        Self {
            slots: values.iter().copied().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.slots.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// Index of the first slot that was never filled.
    pub fn first_missing(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// All values, if every slot was filled.
    pub fn complete(&self) -> Option<Vec<f64>> {
        self.slots.iter().copied().collect()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.slots
    }
}

/// Parse a number the way rubric values are written: surrounding
/// whitespace is ignored.
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Record a mark from one line if it starts with one of `markers`.
fn scan_line(
    line_idx: usize,
    line: &str,
    markers: MarkerSet,
    section: Section,
    marks: &mut MarkVector,
    diags: &mut Diagnostics,
) {
    let Some((slot, marker)) = markers.matching(line) else {
        return;
    };
    // The mark sits between the first colon and the next one, if any.
    let Some(value) = line.split(':').nth(1) else {
        diags.push(Diagnostic::MissingColon {
            section,
            marker,
            line: line_idx,
        });
        return;
    };
    match parse_number(value) {
        Some(mark) => {
            tracing::trace!(marker, mark, "mark");
            marks.set(slot, mark);
        }
        None => diags.push(Diagnostic::UnparsableMark {
            section,
            marker,
            line: line_idx,
            text: value.trim().to_string(),
        }),
    }
}

/// Report the first unfilled slot only; one missing section is enough for
/// the grader to go back to the document.
fn report_first_missing(
    marks: &MarkVector,
    markers: MarkerSet,
    section: Section,
    diags: &mut Diagnostics,
) {
    if let Some(marker) = marks.first_missing().and_then(|idx| markers.get(idx)) {
        diags.push(Diagnostic::MissingSection { section, marker });
    }
}

/// Scan `text` for lines starting with any of `markers` and collect the
/// number written after each line's colon.
pub fn scan_marks(
    text: &str,
    markers: MarkerSet,
    section: Section,
    diags: &mut Diagnostics,
) -> MarkVector {
    let _scope = crate::perf::scope("scan_marks");
    let mut marks = MarkVector::empty(markers.len());
    for (idx, line) in text.split('\n').enumerate() {
        scan_line(idx, line, markers, section, &mut marks, diags);
    }
    report_first_missing(&marks, markers, section, diags);
    marks
}

/// Quality and testing marks for a combined (Assignment 3) document.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedMarks {
    pub tests: MarkVector,
    pub quality: MarkVector,
}

/// Single pass over `text` collecting both quality and testing marks.
///
/// Diagnostics come out in document order, with quality problems reported
/// before testing problems on the same line.
pub fn scan_combined(
    text: &str,
    quality_markers: MarkerSet,
    test_markers: MarkerSet,
    diags: &mut Diagnostics,
) -> CombinedMarks {
    let _scope = crate::perf::scope("scan_combined");
    let mut quality = MarkVector::empty(quality_markers.len());
    let mut tests = MarkVector::empty(test_markers.len());
    for (idx, line) in text.split('\n').enumerate() {
        scan_line(idx, line, quality_markers, Section::Quality, &mut quality, diags);
        scan_line(idx, line, test_markers, Section::Testing, &mut tests, diags);
    }
    report_first_missing(&quality, quality_markers, Section::Quality, diags);
    report_first_missing(&tests, test_markers, Section::Testing, diags);
    CombinedMarks { tests, quality }
}

/// Collect the maximum achievable mark for each criterion from its legend.
///
/// A criterion line carries a legend such as `[poor=0, fair=0.5, good=1]`;
/// the maximum is the value after the last `=` inside the last bracketed
/// group on the line.
pub fn scan_max_marks(text: &str, markers: MarkerSet, diags: &mut Diagnostics) -> MaxMarkVector {
    let _scope = crate::perf::scope("scan_max_marks");
    let mut max_marks = MarkVector::empty(markers.len());
    for (idx, line) in text.split('\n').enumerate() {
        let Some((slot, marker)) = markers.matching(line) else {
            continue;
        };
        let mut groups = line.rsplit(']');
        // rsplit yields the tail after the last ']' first, then the legend
        let (Some(_), Some(legend)) = (groups.next(), groups.next()) else {
            diags.push(Diagnostic::MissingBracket { marker, line: idx });
            continue;
        };
        let text = legend.rsplit('=').next().unwrap_or(legend);
        match parse_number(text) {
            Some(max) => max_marks.set(slot, max),
            None => diags.push(Diagnostic::InvalidMaxMark {
                marker,
                line: idx,
                text: text.trim().to_string(),
            }),
        }
    }
    max_marks
}
