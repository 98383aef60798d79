use std::io::{self, Write};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::Inspection;

/// One font's outcome in JSON output
#[derive(Serialize)]
#[serde(untagged)]
enum JsonResult<'a> {
    Inspection(&'a Inspection),
    Failure { font: &'a str, error: String },
}

/// Print the report lines of one inspection
pub fn write_text(out: &mut impl Write, inspection: &Inspection) -> io::Result<()> {
    for line in &inspection.report.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the failure notice shown instead of a report
pub fn write_failure(out: &mut impl Write, font: &str, error: &Error) -> io::Result<()> {
    writeln!(out, "Inspection failed for {}: {}", font, error)
}

/// Print every outcome as one pretty JSON array, in input order
pub fn write_json(out: &mut impl Write, results: &[(String, Result<Inspection>)]) -> io::Result<()> {
    let entries: Vec<JsonResult<'_>> = results
        .iter()
        .map(|(font, result)| match result {
            Ok(inspection) => JsonResult::Inspection(inspection),
            Err(e) => JsonResult::Failure {
                font,
                error: e.to_string(),
            },
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)
}
