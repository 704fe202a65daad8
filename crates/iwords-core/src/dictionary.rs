use std::collections::HashMap;

use crate::language::LookupResult;

/// Individual dictionary entry
pub trait DictionaryEntry: Send + Sync {
    /// Entry ID, stable across lookups of the same word
    fn id(&self) -> String;

    /// Main headword/term
    fn headword(&self) -> String;

    /// Inflected forms that resolved to this entry
    fn forms(&self) -> Vec<String>;

    /// All senses
    fn senses(&self) -> Vec<Sense>;

    /// Language-specific data as JSON
    fn metadata(&self) -> serde_json::Value;

    /// Convert to generic lookup result
    fn to_lookup_result(&self) -> LookupResult {
        let metadata = match self.metadata() {
            serde_json::Value::Object(fields) => fields
                .into_iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(text) => (key, text),
                    other => (key, other.to_string()),
                })
                .collect(),
            _ => HashMap::new(),
        };

        let mut part_of_speech: Vec<String> = Vec::new();
        let mut definitions = Vec::new();
        for sense in self.senses() {
            for pos in sense.part_of_speech {
                if !part_of_speech.contains(&pos) {
                    part_of_speech.push(pos);
                }
            }
            definitions.push(sense.text);
        }

        LookupResult {
            id: self.id(),
            term: self.headword(),
            forms: self.forms(),
            part_of_speech,
            definitions,
            metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub text: String,
    pub part_of_speech: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl DictionaryEntry for Fixed {
        fn id(&self) -> String {
            "aqua, aquaen.".to_string()
        }

        fn headword(&self) -> String {
            "aqua, aquae".to_string()
        }

        fn forms(&self) -> Vec<String> {
            vec!["aqu.a: nom. sing.".to_string()]
        }

        fn senses(&self) -> Vec<Sense> {
            vec![
                Sense {
                    text: "water;".to_string(),
                    part_of_speech: vec!["n.".to_string()],
                },
                Sense {
                    text: "sea, lake;".to_string(),
                    part_of_speech: vec!["n.".to_string()],
                },
            ]
        }

        fn metadata(&self) -> serde_json::Value {
            serde_json::json!({
                "gender": "fem.",
                "truncated": false,
            })
        }
    }

    #[test]
    fn test_to_lookup_result_flattens_metadata() {
        let result = Fixed.to_lookup_result();

        assert_eq!(result.id, "aqua, aquaen.");
        assert_eq!(result.term, "aqua, aquae");
        assert_eq!(
            result.definitions,
            vec!["water;".to_string(), "sea, lake;".to_string()]
        );
        assert_eq!(result.part_of_speech, vec!["n.".to_string()]);
        assert_eq!(result.metadata.get("gender").map(String::as_str), Some("fem."));
        assert_eq!(result.metadata.get("truncated").map(String::as_str), Some("false"));
    }
}
