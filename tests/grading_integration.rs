use std::path::Path;

use gradeline::command::{Assignment, GradeOptions, ScenarioCount, grade_file, run_command};
use gradeline::editor::EditorBuffer;
use gradeline::grading::{Diagnostic, Section};

const A1_FIXTURE: &str = include_str!("fixtures/a1_feedback.txt");
const A3_FIXTURE: &str = include_str!("fixtures/a3_feedback.txt");

fn write_temp(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("feedback.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_a1_fixture_gets_quality_grade() {
    let mut buf = EditorBuffer::from_text(A1_FIXTURE);
    let report = run_command(&mut buf, Assignment::A1, ScenarioCount::Five);
    assert!(report.written, "{:?}", report.diagnostics);
    assert_eq!(report.quality_grade, Some(4.0));
    assert_eq!(report.testing_grade, None);
    assert!(buf.text().ends_with("Usability:\nQuality: 4.0\n"));
}

#[test]
fn test_a3_fixture_gets_both_grades() {
    let mut buf = EditorBuffer::from_text(A3_FIXTURE);
    let report = run_command(&mut buf, Assignment::A3, ScenarioCount::Five);
    assert!(report.written, "{:?}", report.diagnostics);
    assert!(buf.text().ends_with("Testing: 4.5\nUsability:\nQuality: 4.5\n"));
}

#[test]
fn test_a3_ignores_legends() {
    // Assignment 3 is unchecked, so a mark above its legend still writes
    let doc = A3_FIXTURE.replace(
        "i. Correctness of logic: 1",
        "i. Correctness of logic [poor=0, good=1]: 2",
    );
    let mut buf = EditorBuffer::from_text(&doc);
    let report = run_command(&mut buf, Assignment::A3, ScenarioCount::Five);
    assert!(report.written);
    assert_eq!(report.quality_grade, Some(5.5));
}

#[test]
fn test_a3_carriage_return_and_line_separator_do_not_split_lines() {
    for separator in ['\r', '\u{2028}'] {
        let doc = A3_FIXTURE.replace("Overall\n", &format!("Overall{separator}Scenario 1: 0\n"));
        let mut buf = EditorBuffer::from_text(&doc);
        let report = run_command(&mut buf, Assignment::A3, ScenarioCount::Five);
        assert!(report.written, "{:?}", report.diagnostics);
        assert_eq!(report.testing_grade, Some(4.5));
        assert!(buf.text().contains(&format!("Overall{separator}Scenario 1: 0\n")));
    }
}

#[test]
fn test_a1_missing_section_and_legend_both_reported() {
    let doc = A1_FIXTURE
        .replace("iv. Comments and documentation [poor=0, fair=0.5, good=1]: 1\n", "")
        .replace(
            "vii. Late penalty [2 days=0.6, 1 day=0.8, on time=1]: 0.8",
            "vii. Late penalty: 0.8",
        );
    let mut buf = EditorBuffer::from_text(&doc);
    let report = run_command(&mut buf, Assignment::A1, ScenarioCount::Five);
    assert!(!report.written);
    assert_eq!(
        report.diagnostics.as_slice(),
        &[
            Diagnostic::MissingSection {
                section: Section::Quality,
                marker: "iv."
            },
            Diagnostic::MissingBracket {
                marker: "vii.",
                line: 9
            },
            Diagnostic::MissingMaxMark { marker: "iv." },
        ]
    );
}

#[test]
fn test_a1_missing_legend_blocks_write() {
    let doc = A1_FIXTURE.replace(
        "vii. Late penalty [2 days=0.6, 1 day=0.8, on time=1]: 0.8",
        "vii. Late penalty: 0.8",
    );
    let mut buf = EditorBuffer::from_text(&doc);
    let report = run_command(&mut buf, Assignment::A1, ScenarioCount::Five);
    assert!(!report.written);
    assert_eq!(
        report.diagnostics.as_slice(),
        &[
            Diagnostic::MissingBracket {
                marker: "vii.",
                line: 10
            },
            Diagnostic::MissingMaxMark { marker: "vii." },
        ]
    );
}

#[test]
fn test_a3_missing_grade_lines_reported_together() {
    let doc = A3_FIXTURE
        .replace("Testing:\n", "")
        .replace("Quality:\n", "Quality\n");
    let mut buf = EditorBuffer::from_text(&doc);
    let report = run_command(&mut buf, Assignment::A3, ScenarioCount::Five);
    assert!(!report.written);
    assert_eq!(report.diagnostics.len(), 2);
    assert_eq!(buf.text(), doc);
}

#[test]
fn test_a3_missing_scenario_and_criterion() {
    let doc = A3_FIXTURE
        .replace("Scenario 2: 1\n", "")
        .replace("Scenario 4: 1\n", "")
        .replace("iii. Identifier naming: 1\n", "");
    let mut buf = EditorBuffer::from_text(&doc);
    let report = run_command(&mut buf, Assignment::A3, ScenarioCount::Five);
    assert!(!report.written);
    assert_eq!(
        report.diagnostics.as_slice(),
        &[
            Diagnostic::MissingSection {
                section: Section::Quality,
                marker: "iii."
            },
            Diagnostic::MissingSection {
                section: Section::Testing,
                marker: "Scenario 2"
            },
        ]
    );
}

#[test]
fn test_grade_file_saves_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(dir.path(), A1_FIXTURE);
    let options = GradeOptions {
        assignment: Assignment::A1,
        scenarios: ScenarioCount::Five,
        dry_run: false,
    };
    let graded = grade_file(&path, &options).unwrap();
    assert!(graded.report.written);
    assert!(!graded.buffer.is_dirty());

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\nQuality: 4.0\n"));
}

#[test]
fn test_grade_file_dry_run_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(dir.path(), A3_FIXTURE);
    let options = GradeOptions {
        assignment: Assignment::A3,
        scenarios: ScenarioCount::Five,
        dry_run: true,
    };
    let graded = grade_file(&path, &options).unwrap();
    assert!(graded.report.written);
    assert!(graded.buffer.text().contains("Testing: 4.5"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), A3_FIXTURE);
}

#[test]
fn test_grade_file_preserves_crlf_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let crlf = A1_FIXTURE.replace('\n', "\r\n");
    let path = write_temp(dir.path(), &crlf);
    let options = GradeOptions {
        assignment: Assignment::A1,
        scenarios: ScenarioCount::Five,
        dry_run: false,
    };
    let graded = grade_file(&path, &options).unwrap();
    assert!(graded.report.written, "{:?}", graded.report.diagnostics);
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.ends_with("Usability:\r\nQuality: 4.0\r\n"));
}

#[test]
fn test_grade_file_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = GradeOptions {
        assignment: Assignment::A1,
        scenarios: ScenarioCount::Five,
        dry_run: false,
    };
    let err = grade_file(&dir.path().join("absent.txt"), &options).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
