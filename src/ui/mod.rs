//! Terminal output for grading runs.
//!
//! Diagnostics go to stderr with a severity prefix, grades to stdout.

mod report;

pub use report::{write_diagnostic, write_diagnostics, write_summary};

/// Whether stderr is a terminal that should get colored prefixes.
pub fn stderr_supports_color() -> bool {
    use crossterm::tty::IsTty;
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_tty()
}
