//! Writers for diff results and summaries of a run

mod archive;
mod csv;
mod json;
mod terminal;

use std::io::IsTerminal;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::SummaryFormat;
use crate::diff::DiffResult;

pub use self::archive::{to_zip_bytes, write_archive};
pub use self::csv::{to_csv_bytes, write_csv};
pub use json::JsonSummary;
pub use terminal::TerminalSummary;

/// One compared table, as shown in a summary
#[derive(Debug, Clone, Copy)]
pub struct SummaryEntry<'a> {
    /// File the result is written under
    pub name: &'a str,
    pub result: &'a DiffResult,
}

/// Trait for summary formatters
pub trait SummaryFormatter {
    /// Render a summary of the compared tables to a writer
    fn render(&self, entries: &[SummaryEntry<'_>], writer: &mut dyn WriteColor) -> Result<()>;
}

/// Factory for creating summary formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create a formatter for `format`, or `None` when no summary is wanted
    pub fn create(format: SummaryFormat) -> Option<Box<dyn SummaryFormatter>> {
        match format {
            SummaryFormat::Terminal => Some(Box::new(TerminalSummary::new())),
            SummaryFormat::Json => Some(Box::new(JsonSummary::new())),
            SummaryFormat::None => None,
        }
    }
}

/// Render a summary to stdout
pub fn render_summary_to_stdout(entries: &[SummaryEntry<'_>], format: SummaryFormat) -> Result<()> {
    let Some(formatter) = OutputFactory::create(format) else {
        return Ok(());
    };

    let mut stdout = StandardStream::stdout(color_choice(std::io::stdout().is_terminal()));
    formatter.render(entries, &mut stdout)
}

/// Colors only go to a terminal; `Auto` still honors `NO_COLOR` and `TERM=dumb`
fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
