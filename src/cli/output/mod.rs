pub mod json;
pub mod text;

use crate::cli::OutputFormat;
use crate::types::Report;

pub fn render(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
    }
}
