// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. grading::GradeLine)
    clippy::module_name_repetitions
)]

//! # Gradeline
//!
//! Fills in overall grades on marked-up assignment feedback files.
//!
//! A feedback file carries one line per rubric item, each starting with a
//! fixed marker and ending in the mark awarded:
//!
//! ```text
//! i. Correctness [poor=0, fair=0.5, good=1]: 1
//! Scenario 3: 0.5
//! ```
//!
//! Gradeline reads those marks, computes the testing grade (a sum) and the
//! quality grade (a weighted sum rounded up to the next half point), and
//! inserts them after the colon on the `Testing:` / `Quality:` lines.
//!
//! ## Modules
//!
//! - [`grading`]: Marker tables, scanners, range checks, grade arithmetic
//! - [`editor`]: Line buffer and scoped edits the grades are written through
//! - [`command`]: The per-assignment grading commands
//! - [`config`]: Saved default flags
//! - [`ui`]: Terminal output for diagnostics and grades
//! - [`perf`]: Timing scopes and debug event log

pub mod command;
pub mod config;
pub mod editor;
pub mod grading;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::command::{Assignment, GradeOptions, GradeReport, ScenarioCount, grade_file, run_command};
    pub use crate::editor::{EditorBuffer, TextBuffer};
    pub use crate::grading::{Diagnostic, Diagnostics, Severity};
}
