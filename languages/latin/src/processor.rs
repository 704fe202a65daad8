use iwords_core::dictionary::DictionaryEntry;
use iwords_core::error::LookupError;
use iwords_core::language::{LanguageProcessor, Lookup};
use iwords_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::definition::parse_report;
use crate::engine::extract_report;

/// Latin language processor for WORDS engine reports
#[derive(Debug, Default)]
pub struct LatinProcessor;

impl LatinProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for LatinProcessor {
    fn language_code(&self) -> &str {
        "la"
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn report_block(&self, output: &str) -> Result<String, LookupError> {
        extract_report(output)
            .map_err(|e| LookupError::Report(e.to_string()))?
            .ok_or(LookupError::NotFound)
    }

    fn lookup(&self, report: &str) -> Result<Lookup, LookupError> {
        let report = parse_report(report).map_err(|e| {
            tracing::warn!("Failed to parse report: {}", e);
            LookupError::Report(e.to_string())
        })?;

        Ok(Lookup {
            results: report
                .definitions
                .iter()
                .map(|definition| definition.to_lookup_result())
                .collect(),
            truncated: report.truncated,
        })
    }
}
