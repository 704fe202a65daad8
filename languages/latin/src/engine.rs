//! Helpers around the raw stdout of the WORDS analysis engine.

use crate::error::ReportError;

/// Printed by the engine right before the analysis of the input word.
const REPORT_START: &str = "=>";

/// Printed by the engine when it is waiting for the next input again.
const REPORT_END: &str = "=>Blank exits =>";

/// Isolate the analysis block from the engine's full output.
///
/// Returns `Ok(None)` when the engine printed no analysis at all, which is
/// how it reports an unknown word.
pub fn extract_report(output: &str) -> Result<Option<String>, ReportError> {
    let lines: Vec<&str> = output
        .lines()
        .filter(|line| !line.is_empty())
        .collect();

    let mut start = None;
    let mut end = None;
    for (i, line) in lines.iter().enumerate() {
        if *line == REPORT_START {
            start = Some(i + 1);
        } else if *line == REPORT_END {
            end = i.checked_sub(1);
        }
    }

    let Some(start) = start else {
        tracing::debug!("No report start marker in engine output");
        return Ok(None);
    };

    match end {
        Some(end) if start < end => Ok(Some(lines[start..=end].join("\n"))),
        Some(_) => Err(ReportError::MalformedOutput(
            "report end marker precedes its content".to_string(),
        )),
        None => Err(ReportError::MalformedOutput(
            "missing report end marker".to_string(),
        )),
    }
}
