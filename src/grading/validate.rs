//! Range checks of quality marks against their legend maxima.

use super::diagnostics::{Diagnostic, Diagnostics};
use super::markers::MarkerSet;
use super::scanner::{MarkVector, MaxMarkVector};

/// Check each mark against its maximum.
///
/// Returns `false` on the first missing maximum or the first mark above its
/// maximum. Negative marks are reported as warnings but do not fail the
/// check. Slots with no mark are skipped.
pub fn check_marks_in_range(
    marks: &MarkVector,
    max_marks: &MaxMarkVector,
    markers: MarkerSet,
    diags: &mut Diagnostics,
) -> bool {
    if let Some(marker) = max_marks.first_missing().and_then(|idx| markers.get(idx)) {
        diags.push(Diagnostic::MissingMaxMark { marker });
        return false;
    }

    for (idx, marker) in markers.iter().enumerate() {
        let (Some(mark), Some(max)) = (marks.get(idx), max_marks.get(idx)) else {
            continue;
        };
        if mark > max {
            diags.push(Diagnostic::MarkAboveMax { marker, mark, max });
            return false;
        } else if mark < 0.0 {
            diags.push(Diagnostic::MarkBelowZero { marker, mark });
        }
    }
    tracing::debug!(count = marks.len(), "marks within range");
    true
}
