use iwords_core::dictionary::{DictionaryEntry, Sense};
use serde::Serialize;

use crate::category::Category;
use crate::error::ReportError;
use crate::expansion::{parse_expansion, Expansion};
use crate::possibility::{parse_possibility, Possibility};

/// Line the engine prints when it left out less likely analyses.
const TRUNCATION_MARKER: &str = "*";

/// One dictionary entry together with the analyses that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub possibilities: Vec<Possibility>,
    pub expansion: Expansion,
    pub meaning: String,
    /// Whether unlikely possibilities were left out of this entry.
    pub truncated: bool,
}

impl Definition {
    /// Identity for reusing rendered views. Not guaranteed to be unique
    /// within one report.
    pub fn id(&self) -> String {
        format!(
            "{}{}",
            self.expansion.principal_parts(),
            self.expansion.part_of_speech().abbreviation()
        )
    }
}

impl DictionaryEntry for Definition {
    fn id(&self) -> String {
        Definition::id(self)
    }

    fn headword(&self) -> String {
        self.expansion.principal_parts().to_string()
    }

    fn forms(&self) -> Vec<String> {
        self.possibilities
            .iter()
            .map(|p| format!("{}: {}", p.text(), p))
            .collect()
    }

    fn senses(&self) -> Vec<Sense> {
        let pos = self.expansion.part_of_speech().abbreviation().to_string();
        self.meaning
            .lines()
            .map(|text| Sense {
                text: text.to_string(),
                part_of_speech: vec![pos.clone()],
            })
            .collect()
    }

    fn metadata(&self) -> serde_json::Value {
        let mut metadata = serde_json::json!({
            "truncated": self.truncated,
        });
        match &self.expansion {
            Expansion::Noun {
                declension, gender, ..
            } => {
                metadata["declension"] = declension.abbreviation().into();
                metadata["gender"] = gender.abbreviation().into();
            }
            Expansion::Verb {
                conjugation: Some(conjugation),
                ..
            } => {
                metadata["conjugation"] = conjugation.abbreviation().into();
            }
            _ => {}
        }
        metadata
    }
}

/// Everything parsed out of one report block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub definitions: Vec<Definition>,
    /// Whether a truncation marker appeared anywhere in the block.
    pub truncated: bool,
}

/// Parse an engine report block into definitions.
///
/// Lines may be separated by CR, LF or CRLF; empty lines are skipped. The
/// only failure is a line that cannot be classified before the first header.
pub fn parse_report(text: &str) -> Result<Report, ReportError> {
    let mut assembler = Assembler::default();

    let lines = text
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| line.split('\r').map(move |part| (idx + 1, part)))
        .filter(|(_, line)| !line.is_empty());

    for (line_number, line) in lines {
        assembler.feed(line_number, line)?;
    }

    let report = assembler.finish();
    tracing::debug!(
        "Parsed {} definitions (truncated: {})",
        report.definitions.len(),
        report.truncated
    );
    Ok(report)
}

/// Line-by-line reducer grouping possibilities, a header and its meaning
/// into definitions.
#[derive(Debug, Default)]
struct Assembler {
    definitions: Vec<Definition>,
    possibilities: Vec<Possibility>,
    expansion: Option<Expansion>,
    meaning: Option<String>,
    truncated: bool,
    saw_marker: bool,
}

impl Assembler {
    fn feed(&mut self, line_number: usize, line: &str) -> Result<(), ReportError> {
        if let Some(possibility) = parse_possibility(line) {
            tracing::trace!("line {line_number}: possibility");
            self.on_possibility(possibility);
        } else if let Some(expansion) = parse_expansion(line) {
            tracing::trace!("line {line_number}: expansion");
            self.on_expansion(expansion);
        } else if self.expansion.is_some() {
            tracing::trace!("line {line_number}: meaning");
            self.on_meaning(line);
        } else {
            return Err(ReportError::UnexpectedLine {
                line_number,
                line: line.to_string(),
            });
        }
        Ok(())
    }

    fn on_possibility(&mut self, possibility: Possibility) {
        self.flush();
        self.possibilities.push(possibility);
    }

    fn on_expansion(&mut self, expansion: Expansion) {
        if self.expansion.is_some() {
            self.flush();
            if let Some(dropped) = self.expansion.take() {
                tracing::debug!(
                    "Dropping entry without meaning: {}",
                    dropped.principal_parts()
                );
            }
            self.possibilities.clear();
            self.truncated = false;
        }
        self.expansion = Some(expansion);
    }

    fn on_meaning(&mut self, line: &str) {
        if line == TRUNCATION_MARKER {
            self.truncated = true;
            self.saw_marker = true;
            return;
        }
        match &mut self.meaning {
            Some(meaning) => {
                meaning.push('\n');
                meaning.push_str(line);
            }
            None => self.meaning = Some(line.to_string()),
        }
    }

    /// Emit the pending definition if it has both a header and a meaning.
    fn flush(&mut self) {
        match (self.expansion.take(), self.meaning.take()) {
            (Some(expansion), Some(meaning)) => self.definitions.push(Definition {
                possibilities: std::mem::take(&mut self.possibilities),
                expansion,
                meaning,
                truncated: std::mem::take(&mut self.truncated),
            }),
            (expansion, meaning) => {
                self.expansion = expansion;
                self.meaning = meaning;
            }
        }
    }

    fn finish(mut self) -> Report {
        self.flush();
        if let Some(dropped) = &self.expansion {
            tracing::debug!(
                "Dropping entry without meaning at end of report: {}",
                dropped.principal_parts()
            );
        }
        Report {
            definitions: self.definitions,
            truncated: self.saw_marker,
        }
    }
}
