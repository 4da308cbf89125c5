use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::command::GradeReport;
use crate::grading::{Diagnostic, Severity, format_grade};

fn severity_prefix(severity: Severity, color: bool) -> String {
    let label = match severity {
        Severity::Warning => "[warn]",
        Severity::Error => "[error]",
    };
    if !color {
        return label.to_string();
    }
    match severity {
        Severity::Warning => label.yellow().to_string(),
        Severity::Error => label.red().bold().to_string(),
    }
}

/// Write one diagnostic line, e.g. `[error] line 4: Missing colon on ...`.
pub fn write_diagnostic<W: Write>(
    out: &mut W,
    diagnostic: &Diagnostic,
    color: bool,
) -> io::Result<()> {
    let prefix = severity_prefix(diagnostic.severity(), color);
    match diagnostic.line() {
        Some(line) => writeln!(out, "{prefix} line {}: {diagnostic}", line + 1),
        None => writeln!(out, "{prefix} {diagnostic}"),
    }
}

pub fn write_diagnostics<W: Write>(out: &mut W, report: &GradeReport, color: bool) -> io::Result<()> {
    for diagnostic in &report.diagnostics {
        write_diagnostic(out, diagnostic, color)?;
    }
    Ok(())
}

/// Write the computed grades, one per line.
pub fn write_summary<W: Write>(out: &mut W, report: &GradeReport) -> io::Result<()> {
    if let Some(grade) = report.testing_grade {
        writeln!(out, "Testing: {}", format_grade(grade))?;
    }
    if let Some(grade) = report.quality_grade {
        writeln!(out, "Quality: {}", format_grade(grade))?;
    }
    if !report.written {
        writeln!(out, "(not written)")?;
    }
    Ok(())
}
