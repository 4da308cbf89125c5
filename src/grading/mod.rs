//! Rubric parsing and grade computation.
//!
//! This module handles:
//! - Finding criterion and scenario lines by their fixed markers
//! - Reading legend maxima and range-checking marks against them
//! - Computing the overall testing and quality grades
//! - Writing those grades onto the overall grade lines

mod calc;
mod diagnostics;
mod markers;
mod scanner;
mod validate;
mod writer;

pub use calc::{format_grade, overall_quality, overall_test};
pub use diagnostics::{Diagnostic, Diagnostics, Section, Severity};
pub use markers::{GradeLine, MarkerSet, QUALITY_MARKERS, TEST_MARKERS_FIVE, TEST_MARKERS_SIX};
pub use scanner::{
    CombinedMarks, MarkVector, MaxMarkVector, scan_combined, scan_marks, scan_max_marks,
};
pub use validate::check_marks_in_range;
pub use writer::{GradePosition, locate_grade_line, write_combined_grades, write_quality_grade};
