use csv::{ReaderBuilder, StringRecord};

/// Splits CSV text into rows of owned fields.
///
/// There is no header row and rows may have any width; the parser decides which rows to keep.
/// Input is already valid UTF-8 and records are flexible, so `Err` items are not expected in
/// practice; the parser still skips them.
pub fn rows(text: &str) -> impl Iterator<Item = Result<Vec<String>, csv::Error>> + '_ {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .into_records()
        .map(|record| record.map(into_fields))
}

fn into_fields(record: StringRecord) -> Vec<String> {
    record.iter().map(str::to_owned).collect()
}
