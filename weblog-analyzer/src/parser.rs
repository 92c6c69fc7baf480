use derive_more::Display;
use tracing::debug;

use crate::{
    invariants::{RequestPath, UserAgent},
    models::LogRecord,
};

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[display("expected 5 fields, found {_0}")]
    FieldCount(usize),
    #[display("size {_0:?} is not a non-negative integer")]
    InvalidSize(String),
    // The tokenizer reads already-decoded text, so this only fires on tokenizer errors.
    #[display("unreadable row: {_0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Valid(LogRecord),
    Skipped(SkipReason),
}

/// Turns one tokenized row into a record.
///
/// Rows need exactly five fields: path, timestamp, user agent, status and size. Every field is
/// trimmed and the size must parse as a `u64`.
pub fn parse_row<S: AsRef<str>>(fields: &[S]) -> RowOutcome {
    let [path, timestamp, user_agent, status, size] = fields else {
        return RowOutcome::Skipped(SkipReason::FieldCount(fields.len()));
    };
    let size_text = size.as_ref().trim();
    let Ok(size) = size_text.parse::<u64>() else {
        return RowOutcome::Skipped(SkipReason::InvalidSize(size_text.into()));
    };
    let Ok(path) = path.as_ref().parse::<RequestPath>();
    let Ok(user_agent) = user_agent.as_ref().parse::<UserAgent>();
    RowOutcome::Valid(LogRecord {
        path,
        timestamp: timestamp.as_ref().trim().into(),
        user_agent,
        status: status.as_ref().trim().into(),
        size,
    })
}

/// Keeps the valid rows in input order and drops everything else.
pub fn parse<I, E>(rows: I) -> Vec<LogRecord>
where
    I: IntoIterator<Item = Result<Vec<String>, E>>,
    E: std::fmt::Display,
{
    let mut skipped = 0usize;
    let records: Vec<_> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let outcome = match row {
                Ok(fields) => parse_row(&fields),
                Err(e) => RowOutcome::Skipped(SkipReason::Malformed(e.to_string())),
            };
            match outcome {
                RowOutcome::Valid(record) => Some(record),
                RowOutcome::Skipped(reason) => {
                    debug!(row = index + 1, %reason, "skipping row");
                    skipped += 1;
                    None
                }
            }
        })
        .collect();
    debug!(parsed = records.len(), skipped, "finished parsing");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    fn row(fields: &[&str]) -> Result<Vec<String>, String> {
        Ok(fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn parse_row_valid() {
        let outcome = parse_row(&[
            " /images/logo.png ",
            "2014-01-27 00:00:00",
            " Mozilla/5.0 Firefox/34.0",
            " 200",
            " 2326 ",
        ]);
        let RowOutcome::Valid(record) = outcome else {
            panic!("expected a valid record, got {outcome:?}");
        };
        assert_eq!(record.path.as_str(), "/images/logo.png");
        assert_eq!(record.timestamp, "2014-01-27 00:00:00");
        assert_eq!(record.user_agent.as_str(), "Mozilla/5.0 Firefox/34.0");
        assert_eq!(record.status, "200");
        assert_eq!(record.size, 2326);
    }

    #[test]
    fn parse_row_wrong_field_count() {
        assert_eq!(
            parse_row(&["/a.png", "t1", "agent", "200"]),
            RowOutcome::Skipped(SkipReason::FieldCount(4))
        );
        assert_eq!(
            parse_row(&["/a.png", "t1", "agent", "200", "1", "extra"]),
            RowOutcome::Skipped(SkipReason::FieldCount(6))
        );
        assert_eq!(
            parse_row::<&str>(&[]),
            RowOutcome::Skipped(SkipReason::FieldCount(0))
        );
    }

    #[test]
    fn parse_row_invalid_size() {
        assert_eq!(
            parse_row(&["/a.png", "t1", "agent", "200", "abc"]),
            RowOutcome::Skipped(SkipReason::InvalidSize("abc".into()))
        );
        assert_eq!(
            parse_row(&["/a.png", "t1", "agent", "200", "-5"]),
            RowOutcome::Skipped(SkipReason::InvalidSize("-5".into()))
        );
    }

    #[test]
    fn status_is_kept_as_text() {
        let outcome = parse_row(&["/a", "t", "agent", "n/a", "0"]);
        assert_that!(outcome)
            .mapping(|o| match o {
                RowOutcome::Valid(record) => Some(record.status),
                RowOutcome::Skipped(_) => None,
            })
            .is_equal_to(Some("n/a".to_string()));
    }

    #[test]
    fn parse_drops_bad_rows_and_keeps_order() {
        let rows = vec![
            row(&["/b.html", "t2", "Firefox/90", "200", "500"]),
            row(&["/short", "t", "agent", "200"]),
            Err("invalid utf-8".to_string()),
            row(&["/c.gif", "t3", "Chrome/100", "404", "x12"]),
            row(&["/a.png", "t1", "Chrome/100", "200", "1000"]),
        ];
        let records = parse(rows);
        let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/b.html", "/a.png"]);
    }

    #[test]
    fn parse_keeps_duplicates() {
        let rows = vec![
            row(&["/a.png", "t1", "agent", "200", "1"]),
            row(&["/a.png", "t1", "agent", "200", "1"]),
        ];
        assert_that!(parse(rows)).has_length(2);
    }
}
