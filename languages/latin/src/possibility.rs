use std::fmt;

use serde::Serialize;

use crate::category::{
    Case, Category, Conjugation, Declension, Degree, Gender, Mood, Number, Person, Tense, Voice,
};
use crate::field;

/// Width of the word column at the start of every possibility line.
pub const WORD_WIDTH: usize = 21;

const NOUN_TAG: &str = "N      ";
const ADJECTIVE_TAG: &str = "ADJ    ";
const ADVERB_TAG: &str = "ADV    ";
const VERB_TAG: &str = "V      ";

/// A fully declined noun form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Noun {
    pub text: String,
    pub declension: Declension,
    pub variety: u8,
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.case, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjective {
    pub text: String,
    pub declension: Declension,
    pub variety: u8,
    pub case: Case,
    pub number: Number,
    pub gender: Option<Gender>,
    pub degree: Degree,
}

impl fmt::Display for Adjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.declension, self.case, self.number)?;
        if let Some(gender) = self.gender {
            write!(f, "{gender} ")?;
        }
        write!(f, "{}", self.degree)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adverb {
    pub text: String,
    pub degree: Degree,
}

impl fmt::Display for Adverb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degree)
    }
}

/// A fully conjugated verb form. Person and number are blank for
/// infinitives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verb {
    pub text: String,
    pub conjugation: Conjugation,
    pub variety: u8,
    pub tense: Tense,
    pub voice: Voice,
    pub mood: Mood,
    pub person: Option<Person>,
    pub number: Option<Number>,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ",
            self.conjugation, self.tense, self.voice, self.mood
        )?;
        if let Some(person) = self.person {
            write!(f, "{person} ")?;
        }
        if let Some(number) = self.number {
            write!(f, "{number}")?;
        }
        Ok(())
    }
}

/// One candidate analysis of the looked-up word form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "pos", rename_all = "snake_case")]
pub enum Possibility {
    Noun(Noun),
    Adjective(Adjective),
    Adverb(Adverb),
    Verb(Verb),
}

impl Possibility {
    /// The inflected form (stem and ending) the engine matched.
    pub fn text(&self) -> &str {
        match self {
            Possibility::Noun(noun) => &noun.text,
            Possibility::Adjective(adj) => &adj.text,
            Possibility::Adverb(adv) => &adv.text,
            Possibility::Verb(verb) => &verb.text,
        }
    }
}

impl fmt::Display for Possibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Possibility::Noun(noun) => fmt::Display::fmt(noun, f),
            Possibility::Adjective(adj) => fmt::Display::fmt(adj, f),
            Possibility::Adverb(adv) => fmt::Display::fmt(adv, f),
            Possibility::Verb(verb) => fmt::Display::fmt(verb, f),
        }
    }
}

/// Parse one possibility line, e.g.
/// `ambulav.issem        V      1 1 PLUP ACTIVE  SUB 1 S`.
///
/// Returns `None` when the line is not a possibility line.
pub fn parse_possibility(line: &str) -> Option<Possibility> {
    let (word, rest) = field::take(line, WORD_WIDTH)?;
    let text = word.trim();

    noun(text, rest)
        .or_else(|| adjective(text, rest))
        .or_else(|| adverb(text, rest))
        .or_else(|| verb(text, rest))
}

fn noun(text: &str, input: &str) -> Option<Possibility> {
    let input = field::literal(input, NOUN_TAG)?;
    let (declension, input) = Declension::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (variety, input) = field::digit(input)?;
    let input = field::literal(input, " ")?;
    let (case, input) = Case::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (number, input) = Number::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (gender, _) = Gender::decode(input)?.required()?;

    Some(Possibility::Noun(Noun {
        text: text.to_string(),
        declension,
        variety,
        case,
        number,
        gender,
    }))
}

fn adjective(text: &str, input: &str) -> Option<Possibility> {
    let input = field::literal(input, ADJECTIVE_TAG)?;
    let (declension, input) = Declension::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (variety, input) = field::digit(input)?;
    let input = field::literal(input, " ")?;
    let (case, input) = Case::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (number, input) = Number::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (gender, input) = Gender::decode(input)?.optional();
    let input = field::literal(input, " ")?;
    let (degree, _) = Degree::decode(input)?.required()?;

    Some(Possibility::Adjective(Adjective {
        text: text.to_string(),
        declension,
        variety,
        case,
        number,
        gender,
        degree,
    }))
}

fn adverb(text: &str, input: &str) -> Option<Possibility> {
    let input = field::literal(input, ADVERB_TAG)?;
    let (degree, _) = Degree::decode(input)?.required()?;

    Some(Possibility::Adverb(Adverb {
        text: text.to_string(),
        degree,
    }))
}

fn verb(text: &str, input: &str) -> Option<Possibility> {
    let input = field::literal(input, VERB_TAG)?;
    let (conjugation, input) = Conjugation::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (variety, input) = field::digit(input)?;
    let input = field::literal(input, " ")?;
    let (tense, input) = Tense::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (voice, input) = Voice::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (mood, input) = Mood::decode(input)?.required()?;
    let input = field::literal(input, " ")?;
    let (person, input) = Person::decode(input)?.optional();
    let input = field::literal(input, " ")?;
    let (number, _) = Number::decode(input)?.optional();

    Some(Possibility::Verb(Verb {
        text: text.to_string(),
        conjugation,
        variety,
        tense,
        voice,
        mood,
        person,
        number,
    }))
}
