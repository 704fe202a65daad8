/// Errors raised while reading the analysis engine's output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// A line appeared before any dictionary entry was opened and matched
    /// none of the known line shapes.
    #[error("Unexpected line {line_number} before any entry: {line:?}")]
    UnexpectedLine { line_number: usize, line: String },

    /// The engine printed a start marker without a matching end marker.
    #[error("Incorrectly formatted program output: {0}")]
    MalformedOutput(String),
}
