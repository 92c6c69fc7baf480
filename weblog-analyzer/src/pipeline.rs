use tracing::info;

use crate::{
    analytics::{aggregate_browsers, aggregate_images},
    parser, report, tokenizer,
};

/// Runs the whole analysis over CSV text and returns the report.
pub fn analyze(text: &str) -> String {
    let records = parser::parse(tokenizer::rows(text));
    info!(records = records.len(), "parsed log");
    let images = aggregate_images(&records);
    let browser = aggregate_browsers(&records);
    report::build_report(&images, browser, records.len())
}
