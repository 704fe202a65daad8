use serde::Serialize;

use crate::category::{Category, Conjugation, Declension, Gender, PartOfSpeech};
use crate::field;

/// Separator between the principal parts and the morphology of a header line.
const PARTS_SEPARATOR: &str = "  ";

/// The dictionary headword line of an entry, e.g.
/// `aqua, aquae  N (1st) F   [XXXAX]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "pos", rename_all = "snake_case")]
pub enum Expansion {
    Noun {
        principal_parts: String,
        declension: Declension,
        gender: Gender,
    },
    Adjective {
        principal_parts: String,
    },
    Adverb {
        principal_parts: String,
    },
    Verb {
        principal_parts: String,
        conjugation: Option<Conjugation>,
    },
}

impl Expansion {
    pub fn principal_parts(&self) -> &str {
        match self {
            Expansion::Noun {
                principal_parts, ..
            }
            | Expansion::Adjective { principal_parts }
            | Expansion::Adverb { principal_parts }
            | Expansion::Verb {
                principal_parts, ..
            } => principal_parts,
        }
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        match self {
            Expansion::Noun { .. } => PartOfSpeech::Noun,
            Expansion::Adjective { .. } => PartOfSpeech::Adjective,
            Expansion::Adverb { .. } => PartOfSpeech::Adverb,
            Expansion::Verb { .. } => PartOfSpeech::Verb,
        }
    }
}

/// Parse a header line. Returns `None` when the line is not a header.
pub fn parse_expansion(line: &str) -> Option<Expansion> {
    let (parts, rest) = line.split_once(PARTS_SEPARATOR)?;

    noun(parts, rest)
        .or_else(|| adjective(parts, rest))
        .or_else(|| adverb(parts, rest))
        .or_else(|| verb(parts, rest))
}

fn noun(parts: &str, input: &str) -> Option<Expansion> {
    let input = field::literal(input, PartOfSpeech::Noun.code())?;
    let input = field::literal(input, " (")?;
    let (declension, input) = Declension::decode(input)?.required()?;
    // ordinal suffix: "st", "nd", "rd", "th"
    let input = field::skip(input, 2)?;
    let input = field::literal(input, ") ")?;
    let (gender, _) = Gender::decode(input)?.required()?;

    Some(Expansion::Noun {
        principal_parts: parts.to_string(),
        declension,
        gender,
    })
}

fn adjective(parts: &str, input: &str) -> Option<Expansion> {
    field::literal(input, PartOfSpeech::Adjective.code())?;

    Some(Expansion::Adjective {
        principal_parts: parts.to_string(),
    })
}

fn adverb(parts: &str, input: &str) -> Option<Expansion> {
    field::literal(input, PartOfSpeech::Adverb.code())?;

    Some(Expansion::Adverb {
        principal_parts: parts.to_string(),
    })
}

fn verb(parts: &str, input: &str) -> Option<Expansion> {
    let input = field::literal(input, PartOfSpeech::Verb.code())?;

    Some(Expansion::Verb {
        principal_parts: parts.to_string(),
        conjugation: verb_conjugation(input).flatten(),
    })
}

/// The optional ` (1st) ` group after a verb tag. `None` when the group is
/// missing; `Some(None)` when it is present with an unknown class.
fn verb_conjugation(input: &str) -> Option<Option<Conjugation>> {
    let input = field::literal(input, " (")?;
    let (conjugation, input) = Conjugation::decode(input)?.optional();
    let input = field::skip(input, 2)?;
    field::literal(input, ") ")?;
    Some(conjugation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_noun_header() {
        let parsed = parse_expansion("aqua, aquae  N (1st) F   [XXXAX]").unwrap();

        assert_eq!(
            parsed,
            Expansion::Noun {
                principal_parts: "aqua, aquae".to_string(),
                declension: Declension::First,
                gender: Gender::Feminine,
            }
        );
        assert_eq!(parsed.part_of_speech(), PartOfSpeech::Noun);
    }

    #[test]
    fn noun_with_common_gender_is_not_a_header() {
        assert_eq!(parse_expansion("civis, civis  N (3rd) C   [XXXAX]"), None);
    }

    #[test]
    fn parses_adjective_and_adverb_headers() {
        assert_eq!(
            parse_expansion("bonus, bona -um, melior -or -us, optimus -a -um  ADJ   [XXXAX]"),
            Some(Expansion::Adjective {
                principal_parts: "bonus, bona -um, melior -or -us, optimus -a -um".to_string(),
            })
        );
        assert_eq!(
            parse_expansion("bene, melius, optime  ADV   [XXXAX]"),
            Some(Expansion::Adverb {
                principal_parts: "bene, melius, optime".to_string(),
            })
        );
    }

    #[test]
    fn parses_verb_header_with_conjugation() {
        let parsed = parse_expansion("amo, amare, amavi, amatus  V (1st)   [XXXAO]").unwrap();

        assert_eq!(
            parsed,
            Expansion::Verb {
                principal_parts: "amo, amare, amavi, amatus".to_string(),
                conjugation: Some(Conjugation::First),
            }
        );
        assert_eq!(parsed.principal_parts(), "amo, amare, amavi, amatus");
    }

    #[test]
    fn verb_header_without_group_has_no_conjugation() {
        assert_eq!(
            parse_expansion("sum, esse, fui, futurus  V   [XXXAX]"),
            Some(Expansion::Verb {
                principal_parts: "sum, esse, fui, futurus".to_string(),
                conjugation: None,
            })
        );
    }

    #[test]
    fn verb_header_with_unknown_class_has_no_conjugation() {
        assert_eq!(
            parse_expansion("eo, ire, ivi, itus  V (9th) [XXXAO]"),
            Some(Expansion::Verb {
                principal_parts: "eo, ire, ivi, itus".to_string(),
                conjugation: None,
            })
        );
    }

    #[test]
    fn line_without_double_space_is_not_a_header() {
        assert_eq!(parse_expansion("water; sea; N (1st) F"), None);
    }

    #[test]
    fn unrecognized_tag_is_not_a_header() {
        assert_eq!(parse_expansion("et  CONJ   [XXXAX]"), None);
        assert_eq!(parse_expansion("in  PREP  ACC   [XXXAX]"), None);
    }
}
