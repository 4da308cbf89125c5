//! Writes computed grades onto the overall grade lines.

use super::calc::format_grade;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::markers::GradeLine;
use crate::editor::{Edit, TextBuffer};

/// Line index and byte column of the colon on an overall grade line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradePosition {
    pub line: usize,
    pub col: usize,
}

impl GradePosition {
    /// Where the grade text is inserted: just past the colon.
    pub const fn insert_col(self) -> usize {
        self.col + 1
    }
}

/// Find the first line starting with `grade`'s marker.
pub fn locate_grade_line<B: TextBuffer + ?Sized>(
    buffer: &B,
    grade: GradeLine,
    diags: &mut Diagnostics,
) -> Option<GradePosition> {
    let marker = grade.marker();
    let found = (0..buffer.line_count())
        .filter_map(|idx| buffer.line_at(idx).map(|line| (idx, line)))
        .find(|(_, line)| line.starts_with(marker));

    let Some((line, text)) = found else {
        diags.push(Diagnostic::MissingGradeLine { grade });
        return None;
    };
    match text.find(':') {
        Some(col) => Some(GradePosition { line, col }),
        None => {
            diags.push(Diagnostic::MissingGradeColon { grade, line });
            None
        }
    }
}

fn grade_text(value: f64) -> String {
    format!(" {}", format_grade(value))
}

/// Write the quality grade after the `Quality:` colon.
///
/// Returns whether the grade was written.
pub fn write_quality_grade<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    grade: f64,
    diags: &mut Diagnostics,
) -> bool {
    let Some(pos) = locate_grade_line(&*buffer, GradeLine::Quality, diags) else {
        return false;
    };
    let mut edit = Edit::begin(buffer);
    edit.insert(pos.line, pos.insert_col(), grade_text(grade));
    edit.commit();
    tracing::info!(line = pos.line, grade, "wrote quality grade");
    true
}

/// Write the testing and quality grades in one edit.
///
/// Both lines are located before anything is written, and a missing testing
/// line does not hide a problem with the quality line. Nothing is written
/// unless both are found.
pub fn write_combined_grades<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    testing: f64,
    quality: f64,
    diags: &mut Diagnostics,
) -> bool {
    let test_pos = locate_grade_line(&*buffer, GradeLine::Testing, diags);
    let qual_pos = locate_grade_line(&*buffer, GradeLine::Quality, diags);
    let (Some(test_pos), Some(qual_pos)) = (test_pos, qual_pos) else {
        return false;
    };

    let mut edit = Edit::begin(buffer);
    edit.insert(test_pos.line, test_pos.insert_col(), grade_text(testing));
    edit.insert(qual_pos.line, qual_pos.insert_col(), grade_text(quality));
    edit.commit();
    tracing::info!(testing, quality, "wrote testing and quality grades");
    true
}
