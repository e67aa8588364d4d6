//! Variable extraction from section sheets

use crate::config::LayoutConfig;
use crate::error::VarnameError;
use crate::reader::Sheet;

/// One variable row of a section sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Zero-filled variable number
    pub id: String,
    /// Variable name; `None` means the row is written as a blank line
    pub name: Option<String>,
}

impl Record {
    pub fn new(id: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
        }
    }
}

/// Left-pad `text` with zeros to `width` characters, keeping a leading sign in
/// front. Longer text is returned unchanged.
pub fn pad_identifier(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let zeros = "0".repeat(width - len);
    match text.strip_prefix(['+', '-']) {
        Some(digits) => format!("{}{}{}", &text[..1], zeros, digits),
        None => format!("{}{}", zeros, text),
    }
}

/// Extract the records of one section sheet, in row order
pub fn extract_section(
    sheet: &Sheet,
    layout: &LayoutConfig,
    strict_identifiers: bool,
) -> Result<Vec<Record>, VarnameError> {
    let first_row = layout.first_data_row();
    let last_row = sheet.row_count();

    let mut records = Vec::with_capacity(last_row.saturating_sub(first_row) as usize);
    for row in first_row..last_row {
        let raw_id = sheet.value(row, layout.id_column).to_string();
        let name = match sheet.value(row, layout.name_column) {
            value if value.is_empty() => None,
            value => Some(value.to_string()),
        };

        if strict_identifiers && name.is_some() && !is_valid_identifier(&raw_id, layout.id_width) {
            return Err(VarnameError::InvalidIdentifier {
                sheet: sheet.name.clone(),
                row: row + 1,
                value: raw_id,
            });
        }

        records.push(Record {
            id: pad_identifier(&raw_id, layout.id_width),
            name,
        });
    }

    tracing::debug!(
        sheet = %sheet.name,
        first_row = first_row + 1,
        records = records.len(),
        "extracted section rows"
    );

    Ok(records)
}

fn is_valid_identifier(text: &str, width: usize) -> bool {
    !text.is_empty() && text.len() <= width && text.bytes().all(|b| b.is_ascii_digit())
}
