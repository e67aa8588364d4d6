//! Errors raised while turning a workbook into a DAT file

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VarnameError {
    #[error("Sheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error(
        "Section '{section}' exceeds its fixed capacity: {lines} lines for a span of {span} ({overflow} over)"
    )]
    SectionOverflow {
        section: String,
        lines: usize,
        span: usize,
        overflow: usize,
    },

    #[error("Expected {expected} sections, got {found}")]
    SectionCount { expected: usize, found: usize },

    #[error("Invalid variable number '{value}' in sheet '{sheet}' at row {row}")]
    InvalidIdentifier {
        sheet: String,
        /// 1-based worksheet row, as shown by spreadsheet applications
        row: u32,
        value: String,
    },
}
