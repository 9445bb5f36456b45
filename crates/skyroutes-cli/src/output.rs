//! Output formatting for itinerary rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use skyroutes_lib::{ItinerarySummary, RenderMode};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly itinerary with flight markers.
    #[default]
    Text,
    /// Plain `+`/`|`/`-` markers without emoji.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// Render an itinerary summary to stdout in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_summary(summary: &ItinerarySummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", summary.render_with(RenderMode::Emoji));
            Ok(())
        }
        OutputFormat::Basic => {
            print!("{}", summary.render_with(RenderMode::PlainText));
            Ok(())
        }
        OutputFormat::Json => render_json(summary),
    }
}

/// Write any serialisable value to stdout as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
