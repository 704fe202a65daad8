use unicode_normalization::UnicodeNormalization;

/// Characters the engine treats as commands when they lead or trail a query.
pub const COMMAND_CHARACTERS: [char; 3] = ['#', '!', '@'];

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Strip engine command characters
        text = text.trim_matches(&COMMAND_CHARACTERS[..]).to_string();

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // One query per line of engine input
        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
