//! Closed grammatical categories used in the engine's report.
//!
//! Each category is declared once as rows of `Variant => code, abbreviation`,
//! so the decoding table and the display table cannot drift apart.

use std::fmt;

use serde::Serialize;

use crate::field::{self, Slot};

/// How many characters a category occupies in a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Exactly this many characters must be present.
    Fixed(usize),
    /// Up to this many characters, padded with spaces; fewer at end of line
    /// or when the padding would swallow the next separator.
    UpTo(usize),
}

/// A closed set of codes decoded from a fixed-width slot.
pub trait Category: Copy + Eq + Sized + 'static {
    const WIDTH: Width;

    /// `(variant, code, abbreviation)` rows, one per variant.
    const TABLE: &'static [(Self, &'static str, &'static str)];

    fn code(self) -> &'static str;

    fn abbreviation(self) -> &'static str;

    /// Look up a variant by its exact code.
    fn from_code(code: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, known, _)| *known == code)
            .map(|(variant, _, _)| *variant)
    }

    /// Read this category's slot from the front of `input`.
    ///
    /// The slot is consumed even when its content is not a known code; only
    /// running out of input for a fixed-width slot yields `None`.
    fn decode(input: &str) -> Option<Slot<'_, Self>> {
        let (raw, rest) = match Self::WIDTH {
            Width::Fixed(width) => field::take(input, width)?,
            Width::UpTo(width) => field::take_padded(input, width),
        };
        Some(Slot {
            value: Self::from_code(raw.trim()),
            consumed: raw.len(),
            rest,
        })
    }

    fn all() -> impl Iterator<Item = Self> {
        Self::TABLE.iter().map(|(variant, _, _)| *variant)
    }
}

/// Length of the longest code in a table.
pub const fn longest_code<T>(table: &[(T, &'static str, &'static str)]) -> usize {
    let mut longest = 0;
    let mut i = 0;
    while i < table.len() {
        if table[i].1.len() > longest {
            longest = table[i].1.len();
        }
        i += 1;
    }
    longest
}

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, $width:expr;
        $($variant:ident => $code:literal, $abbr:literal;)+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl Category for $name {
            const WIDTH: Width = $width;

            const TABLE: &'static [(Self, &'static str, &'static str)] = &[
                $(($name::$variant, $code, $abbr),)+
            ];

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn abbreviation(self) -> &'static str {
                match self {
                    $($name::$variant => $abbr,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.abbreviation())
            }
        }
    };
}

category! {
    PartOfSpeech, Width::UpTo(longest_code(PartOfSpeech::TABLE));
    Noun => "N", "n.";
    Verb => "V", "v.";
    Adjective => "ADJ", "adj.";
    Adverb => "ADV", "adv.";
}

category! {
    Gender, Width::Fixed(1);
    Masculine => "M", "masc.";
    Feminine => "F", "fem.";
    Neuter => "N", "neut.";
}

category! {
    Declension, Width::Fixed(1);
    First => "1", "1st decl.";
    Second => "2", "2nd decl.";
    Third => "3", "3rd decl.";
    Fourth => "4", "4th decl.";
    Fifth => "5", "5th decl.";
}

category! {
    Conjugation, Width::Fixed(1);
    First => "1", "1st conj.";
    Second => "2", "2nd conj.";
    Third => "3", "3rd conj.";
    Fourth => "4", "4th conj.";
    Fifth => "5", "5th conj.";
    Sixth => "6", "6th conj.";
}

category! {
    Case, Width::Fixed(3);
    Nominative => "NOM", "nom.";
    Accusative => "ACC", "acc.";
    Ablative => "ABL", "abl.";
    Dative => "DAT", "dat.";
    Genitive => "GEN", "gen.";
    Locative => "LOC", "loc.";
    Vocative => "VOC", "voc.";
}

category! {
    Number, Width::Fixed(1);
    Singular => "S", "sing.";
    Plural => "P", "pl.";
}

category! {
    /// Degree of comparison.
    Degree, Width::UpTo(longest_code(Degree::TABLE));
    Positive => "POS", "pos.";
    Comparative => "COMP", "comp.";
    Superlative => "SUPER", "super.";
}

category! {
    Tense, Width::UpTo(longest_code(Tense::TABLE));
    Present => "PRES", "pres.";
    Imperfect => "IMPF", "impf.";
    Future => "FUT", "fut.";
    Perfect => "PERF", "perf.";
    Pluperfect => "PLUP", "plup.";
    FuturePerfect => "FUTP", "fut. perf.";
}

category! {
    Voice, Width::UpTo(longest_code(Voice::TABLE));
    Active => "ACTIVE", "active";
    Passive => "PASSIVE", "passive";
    Middle => "MIDDLE", "middle";
}

category! {
    Mood, Width::UpTo(longest_code(Mood::TABLE));
    Indicative => "IND", "ind.";
    Infinitive => "INF", "inf.";
    Subjunctive => "SUB", "sub.";
    Imperative => "IMP", "imp.";
}

category! {
    Person, Width::Fixed(1);
    First => "1", "1st person";
    Second => "2", "2nd person";
    Third => "3", "3rd person";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_table<C: Category + fmt::Display>() -> Vec<(String, String)> {
        C::all()
            .map(|variant| (variant.code().to_string(), variant.to_string()))
            .collect()
    }

    fn assert_round_trips<C: Category + fmt::Debug>() {
        for variant in C::all() {
            let slot = C::decode(variant.code()).expect("slot fits its own code");
            assert_eq!(slot.value, Some(variant));
            assert_eq!(C::from_code(variant.code()), Some(variant));
        }
    }

    #[test]
    fn every_code_decodes_to_its_variant() {
        assert_round_trips::<PartOfSpeech>();
        assert_round_trips::<Gender>();
        assert_round_trips::<Declension>();
        assert_round_trips::<Conjugation>();
        assert_round_trips::<Case>();
        assert_round_trips::<Number>();
        assert_round_trips::<Degree>();
        assert_round_trips::<Tense>();
        assert_round_trips::<Voice>();
        assert_round_trips::<Mood>();
        assert_round_trips::<Person>();
    }

    #[test]
    fn display_strings_match_reference_table() {
        let pairs = |rows: &[(&str, &str)]| -> Vec<(String, String)> {
            rows.iter()
                .map(|(code, abbr)| (code.to_string(), abbr.to_string()))
                .collect()
        };

        assert_eq!(
            display_table::<PartOfSpeech>(),
            pairs(&[("N", "n."), ("V", "v."), ("ADJ", "adj."), ("ADV", "adv.")])
        );
        assert_eq!(
            display_table::<Gender>(),
            pairs(&[("M", "masc."), ("F", "fem."), ("N", "neut.")])
        );
        assert_eq!(
            display_table::<Declension>(),
            pairs(&[
                ("1", "1st decl."),
                ("2", "2nd decl."),
                ("3", "3rd decl."),
                ("4", "4th decl."),
                ("5", "5th decl."),
            ])
        );
        assert_eq!(
            display_table::<Conjugation>(),
            pairs(&[
                ("1", "1st conj."),
                ("2", "2nd conj."),
                ("3", "3rd conj."),
                ("4", "4th conj."),
                ("5", "5th conj."),
                ("6", "6th conj."),
            ])
        );
        assert_eq!(
            display_table::<Case>(),
            pairs(&[
                ("NOM", "nom."),
                ("ACC", "acc."),
                ("ABL", "abl."),
                ("DAT", "dat."),
                ("GEN", "gen."),
                ("LOC", "loc."),
                ("VOC", "voc."),
            ])
        );
        assert_eq!(
            display_table::<Number>(),
            pairs(&[("S", "sing."), ("P", "pl.")])
        );
        assert_eq!(
            display_table::<Degree>(),
            pairs(&[("POS", "pos."), ("COMP", "comp."), ("SUPER", "super.")])
        );
        assert_eq!(
            display_table::<Tense>(),
            pairs(&[
                ("PRES", "pres."),
                ("IMPF", "impf."),
                ("FUT", "fut."),
                ("PERF", "perf."),
                ("PLUP", "plup."),
                ("FUTP", "fut. perf."),
            ])
        );
        assert_eq!(
            display_table::<Voice>(),
            pairs(&[
                ("ACTIVE", "active"),
                ("PASSIVE", "passive"),
                ("MIDDLE", "middle"),
            ])
        );
        assert_eq!(
            display_table::<Mood>(),
            pairs(&[
                ("IND", "ind."),
                ("INF", "inf."),
                ("SUB", "sub."),
                ("IMP", "imp."),
            ])
        );
        assert_eq!(
            display_table::<Person>(),
            pairs(&[
                ("1", "1st person"),
                ("2", "2nd person"),
                ("3", "3rd person"),
            ])
        );
    }

    #[test]
    fn variable_widths_follow_longest_code() {
        assert_eq!(Degree::WIDTH, Width::UpTo(5));
        assert_eq!(Tense::WIDTH, Width::UpTo(4));
        assert_eq!(Voice::WIDTH, Width::UpTo(7));
        assert_eq!(Mood::WIDTH, Width::UpTo(3));
        assert_eq!(PartOfSpeech::WIDTH, Width::UpTo(3));
    }

    #[test]
    fn unknown_code_still_consumes_its_width() {
        let slot = Case::decode("XYZ S").unwrap();
        assert_eq!(slot.value, None);
        assert_eq!(slot.consumed, 3);
        assert_eq!(slot.rest, " S");
    }

    #[test]
    fn fixed_width_needs_enough_input() {
        assert!(Case::decode("NO").is_none());
        assert!(Gender::decode("").is_none());
    }

    #[test]
    fn padded_codes_are_trimmed() {
        let slot = Tense::decode("FUT  ACTIVE").unwrap();
        assert_eq!(slot.value, Some(Tense::Future));
        assert_eq!(slot.rest, " ACTIVE");

        let slot = Voice::decode("ACTIVE  SUB").unwrap();
        assert_eq!(slot.value, Some(Voice::Active));
        assert_eq!(slot.rest, " SUB");
    }

    #[test]
    fn short_padding_leaves_the_separator() {
        let slot = Voice::decode("ACTIVE IND 3 S").unwrap();
        assert_eq!(slot.value, Some(Voice::Active));
        assert_eq!(slot.consumed, 6);
        assert_eq!(slot.rest, " IND 3 S");

        let slot = Tense::decode("FUT ACTIVE").unwrap();
        assert_eq!(slot.value, Some(Tense::Future));
        assert_eq!(slot.rest, " ACTIVE");
    }

    #[test]
    fn variable_width_takes_what_is_left_at_end_of_line() {
        let slot = Degree::decode("POS").unwrap();
        assert_eq!(slot.value, Some(Degree::Positive));
        assert_eq!(slot.rest, "");
    }

    #[test]
    fn digit_categories_reject_out_of_range() {
        assert_eq!(Declension::decode("6").unwrap().value, None);
        assert_eq!(Conjugation::decode("6").unwrap().value, Some(Conjugation::Sixth));
        assert_eq!(Person::decode("0").unwrap().value, None);
    }
}
