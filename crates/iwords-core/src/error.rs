#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Report is not in the expected format: {0}")]
    Report(String),

    #[error("No results found")]
    NotFound,
}
