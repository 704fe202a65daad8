use std::collections::HashMap;

use serde::Serialize;

use crate::error::LookupError;

/// Query cleanup and report interpretation for one analysis engine language
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "la", ...)
    fn language_code(&self) -> &str;

    /// Clean up a user query before it is handed to the engine
    fn normalize(&self, text: &str) -> String;

    /// Cut the report block for one query out of the engine's full output
    fn report_block(&self, output: &str) -> Result<String, LookupError>;

    /// Interpret the engine's report block for one query
    fn lookup(&self, report: &str) -> Result<Lookup, LookupError>;
}

/// Results for one query, in the order the engine reported them
#[derive(Debug, Clone, Default, Serialize)]
pub struct Lookup {
    pub results: Vec<LookupResult>,
    /// Whether the engine left out less likely analyses
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub id: String,
    pub term: String,
    /// Inflected forms of the query that led to this entry
    pub forms: Vec<String>,
    /// Part-of-speech abbreviations over all senses, first occurrence first
    pub part_of_speech: Vec<String>,
    pub definitions: Vec<String>,
    pub metadata: HashMap<String, String>,
}
