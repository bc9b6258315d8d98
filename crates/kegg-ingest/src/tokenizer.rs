//! KEGG flat-file tokenizer
//!
//! A KEGG record is a block of fixed-column lines terminated by `///`.
//! Columns 0-11 hold the field name and the body starts at column 12.
//! A line with blank name columns continues the previous field:
//!
//! ```text
//! ENTRY       K00001                      KO
//! DBLINKS     RN: R00000
//!             COG: COG0000
//! ///
//! ```

/// Token separating consecutive records
pub const RECORD_DELIMITER: &str = "///";

/// Width of the field-name column block
pub const FIELD_NAME_WIDTH: usize = 12;

/// Split a multi-record blob into raw record bodies
///
/// The fragment after the final delimiter is dropped, so text that does not
/// end with `///` loses its unterminated tail.
pub fn split_records(text: &str) -> Vec<&str> {
    let mut fragments: Vec<&str> = text.split(RECORD_DELIMITER).collect();
    fragments.pop();
    fragments
}

/// Split one physical line into trimmed (name, body) columns
///
/// Columns are counted in characters, not bytes.
pub fn split_columns(line: &str) -> (&str, &str) {
    let boundary = line
        .char_indices()
        .nth(FIELD_NAME_WIDTH)
        .map_or(line.len(), |(idx, _)| idx);
    let (name, body) = line.split_at(boundary);
    (name.trim(), body.trim())
}

/// A physical line resolved to the field it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalLine<'a> {
    pub field: &'a str,
    pub body: &'a str,
    /// The untouched physical line, kept for error context
    pub raw: &'a str,
}

/// Iterator over the logical lines of one raw record
pub struct LogicalLines<'a> {
    lines: std::str::Lines<'a>,
    /// Field name of the most recent logical line
    current_field: Option<&'a str>,
}

impl<'a> LogicalLines<'a> {
    pub fn new(raw_record: &'a str) -> Self {
        Self {
            lines: raw_record.trim().lines(),
            current_field: None,
        }
    }

    pub fn current_field(&self) -> Option<&'a str> {
        self.current_field
    }
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = LogicalLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            let (name, body) = split_columns(raw);
            if !name.is_empty() {
                self.current_field = Some(name);
            }
            // Continuation lines before any named field have nothing to attach to
            if let Some(field) = self.current_field {
                return Some(LogicalLine { field, body, raw });
            }
        }
        None
    }
}
