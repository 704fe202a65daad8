use anyhow::Context;
use iwords_config::display::DisplayMode;
use iwords_core::error::LookupError;
use iwords_core::language::LanguageProcessor;

const NO_RESULTS: &str = "No results found";

#[derive(Debug, Clone)]
pub struct Options {
    pub mode: DisplayMode,
    /// Input is already the report block, not the engine's full output
    pub block: bool,
    pub diagnostic: bool,
    pub show_possibilities: bool,
}

/// Produce the text printed for one engine run
pub fn render(
    processor: &dyn LanguageProcessor,
    input: &str,
    options: &Options,
) -> anyhow::Result<String> {
    let block = if options.block {
        input.to_string()
    } else {
        match processor.report_block(input) {
            Ok(block) => block,
            Err(LookupError::NotFound) => {
                return Ok(with_diagnostics(NO_RESULTS.to_string(), input, options));
            }
            Err(e) => return Err(e).context("Failed to read engine output"),
        }
    };

    let body = match options.mode {
        DisplayMode::Raw => block,
        DisplayMode::Pretty => match processor.lookup(&block) {
            Ok(mut lookup) => {
                if !options.show_possibilities {
                    for result in &mut lookup.results {
                        result.forms.clear();
                    }
                }
                serde_json::to_string_pretty(&lookup)?
            }
            Err(e) => {
                tracing::warn!("Showing raw output: {}", e);
                block
            }
        },
    };

    Ok(with_diagnostics(body, input, options))
}

fn with_diagnostics(body: String, input: &str, options: &Options) -> String {
    if !options.diagnostic {
        return body;
    }
    format!(
        "{body}\n\n\n\n\n===============\nDIAGNOSTIC MODE\n===============\n\nProgram output:\n---------------\n{input}"
    )
}
