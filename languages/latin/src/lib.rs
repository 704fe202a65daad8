pub mod category;
pub mod definition;
pub mod engine;
pub mod error;
pub mod expansion;
pub mod field;
pub mod possibility;
pub mod processor;


pub use category::{
    Case, Category, Conjugation, Declension, Degree, Gender, Mood, Number, PartOfSpeech, Person,
    Tense, Voice,
};
pub use definition::{Definition, Report, parse_report};
pub use engine::extract_report;
pub use error::ReportError;
pub use expansion::{Expansion, parse_expansion};
pub use possibility::{Adjective, Adverb, Noun, Possibility, Verb, parse_possibility};
pub use processor::LatinProcessor;
