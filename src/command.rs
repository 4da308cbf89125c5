//! Grading commands.
//!
//! Each command is a straight pipeline over one document: scan the marks,
//! compute the grades, optionally range-check them, then write them onto the
//! overall grade lines. Problems are collected into the report rather than
//! stopping the scan: every check still runs when a mark is missing, and only
//! the write is skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::editor::{EditorBuffer, TextBuffer};
use crate::grading::{
    Diagnostics, GradeLine, MarkerSet, QUALITY_MARKERS, Section, TEST_MARKERS_FIVE,
    TEST_MARKERS_SIX, check_marks_in_range, locate_grade_line, overall_quality, overall_test,
    scan_combined, scan_marks, scan_max_marks, write_combined_grades, write_quality_grade,
};

/// Which assignment rubric the document follows.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Assignment {
    /// Quality criteria only, checked against legend maxima
    A1,
    /// Same rubric as A1
    A2,
    /// Test scenarios plus quality criteria, unchecked
    A3,
}

impl Assignment {
    pub const fn name(self) -> &'static str {
        match self {
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::A3 => "a3",
        }
    }
}

/// Number of test scenarios on an Assignment 3 rubric.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioCount {
    #[default]
    #[value(name = "5")]
    Five,
    #[value(name = "6")]
    Six,
}

impl ScenarioCount {
    pub const fn markers(self) -> MarkerSet {
        match self {
            Self::Five => TEST_MARKERS_FIVE,
            Self::Six => TEST_MARKERS_SIX,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Five => "5",
            Self::Six => "6",
        }
    }
}

/// Outcome of one grading command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub assignment: Assignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testing_grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_grade: Option<f64>,
    /// Whether grades were written into the document.
    pub written: bool,
    pub diagnostics: Diagnostics,
}

impl GradeReport {
    fn new(assignment: Assignment) -> Self {
        Self {
            assignment,
            testing_grade: None,
            quality_grade: None,
            written: false,
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Run the grading command for `assignment` against `buffer`.
pub fn run_command<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    assignment: Assignment,
    scenarios: ScenarioCount,
) -> GradeReport {
    let _scope = crate::perf::scope("run_command");
    let text = buffer_text(&*buffer);
    let mut report = GradeReport::new(assignment);
    match assignment {
        Assignment::A1 | Assignment::A2 => grade_quality_only(buffer, &text, &mut report),
        Assignment::A3 => grade_combined(buffer, &text, scenarios.markers(), &mut report),
    }
    tracing::info!(
        assignment = assignment.name(),
        written = report.written,
        diagnostics = report.diagnostics.len(),
        "grading finished"
    );
    report
}

fn buffer_text<B: TextBuffer + ?Sized>(buffer: &B) -> String {
    (0..buffer.line_count())
        .filter_map(|idx| buffer.line_at(idx))
        .collect::<Vec<_>>()
        .join("\n")
}

fn grade_quality_only<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    text: &str,
    report: &mut GradeReport,
) {
    let diags = &mut report.diagnostics;
    let marks = scan_marks(text, QUALITY_MARKERS, Section::Quality, diags);
    let max_marks = scan_max_marks(text, QUALITY_MARKERS, diags);
    let in_range = check_marks_in_range(&marks, &max_marks, QUALITY_MARKERS, diags);

    let Some(marks) = marks.complete() else {
        tracing::debug!("quality marks incomplete, nothing written");
        check_grade_lines(&*buffer, &[GradeLine::Quality], diags);
        return;
    };
    let grade = overall_quality(&marks);
    report.quality_grade = Some(grade);

    if in_range {
        report.written = write_quality_grade(buffer, grade, diags);
    } else {
        check_grade_lines(&*buffer, &[GradeLine::Quality], diags);
    }
}

fn grade_combined<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    text: &str,
    test_markers: MarkerSet,
    report: &mut GradeReport,
) {
    let diags = &mut report.diagnostics;
    let marks = scan_combined(text, QUALITY_MARKERS.without_last(), test_markers, diags);
    let (Some(tests), Some(quality)) = (marks.tests.complete(), marks.quality.complete()) else {
        tracing::debug!("testing or quality marks incomplete, nothing written");
        check_grade_lines(&*buffer, &[GradeLine::Testing, GradeLine::Quality], diags);
        return;
    };
    let testing_grade = overall_test(&tests);
    let quality_grade = overall_quality(&quality);
    report.testing_grade = Some(testing_grade);
    report.quality_grade = Some(quality_grade);
    report.written = write_combined_grades(buffer, testing_grade, quality_grade, diags);
}

/// Report missing or malformed grade lines when no grade will be written.
fn check_grade_lines<B: TextBuffer + ?Sized>(
    buffer: &B,
    lines: &[GradeLine],
    diags: &mut Diagnostics,
) {
    for &grade in lines {
        locate_grade_line(buffer, grade, diags);
    }
}

/// Options for grading a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOptions {
    pub assignment: Assignment,
    pub scenarios: ScenarioCount,
    /// Leave the file untouched even when grades were computed.
    pub dry_run: bool,
}

/// A graded file: the report plus the document as it now reads.
#[derive(Debug)]
pub struct GradedFile {
    pub report: GradeReport,
    pub buffer: EditorBuffer,
}

/// Grade the feedback file at `path`, saving it back when grades were
/// written and this is not a dry run.
///
/// # Errors
/// Returns an error if the file cannot be read or written.
pub fn grade_file(path: &Path, options: &GradeOptions) -> Result<GradedFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut buffer = EditorBuffer::from_text(&content);
    let report = run_command(&mut buffer, options.assignment, options.scenarios);

    if buffer.is_dirty() && !options.dry_run {
        fs::write(path, buffer.text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        buffer.mark_clean();
        crate::perf::log_event("file.saved", path.display().to_string());
    }

    Ok(GradedFile { report, buffer })
}
