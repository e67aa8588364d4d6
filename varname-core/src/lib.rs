//! Conversion of a robot controller variable tracker workbook into the
//! fixed-layout `VARNAME.DAT` file read by the controller.
//!
//! The pipeline is strictly sequential: read the workbook, extract the
//! variables of each section sheet, pad every section to its fixed span and
//! write the file.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub mod config;
pub mod error;
pub mod extractor;
pub mod padder;
pub mod reader;
pub mod section;
pub mod writer;

pub use config::{LayoutConfig, LineEnding, ParserConfig};
pub use error::VarnameError;
pub use extractor::Record;
pub use padder::SectionData;
pub use reader::{Workbook, read_workbook};
pub use section::{PADDING_BOUNDARIES, SECTIONS, SectionSpec};

/// Per-section outcome of a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub sheet_name: String,
    pub tag: String,
    /// Rows extracted from the sheet
    pub records: usize,
    /// Rows with a variable name
    pub named: usize,
    /// Blank lines added to fill the span
    pub padding: usize,
    /// Lines the section occupies, header included
    pub span: usize,
}

impl From<&SectionData> for SectionSummary {
    fn from(data: &SectionData) -> Self {
        Self {
            sheet_name: data.spec.sheet_name.to_string(),
            tag: data.spec.tag.to_string(),
            records: data.records.len(),
            named: data.named_count(),
            padding: data.padding,
            span: data.line_count(),
        }
    }
}

/// Workbook to DAT converter
pub struct VarnameParser {
    config: ParserConfig,
}

impl VarnameParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Extract and pad every section of `workbook`
    pub fn build_sections(&self, workbook: &Workbook) -> Result<Vec<SectionData>, VarnameError> {
        let mut sections = Vec::with_capacity(SECTIONS.len());

        for spec in SECTIONS {
            tracing::info!("Parsing sheet: {}", spec.sheet_name);
            let records = match workbook.get_sheet(spec.sheet_name) {
                Some(sheet) => extractor::extract_section(
                    sheet,
                    &self.config.layout,
                    self.config.validation.strict_identifiers,
                )?,
                None if self.config.validation.allow_missing_sheets => {
                    tracing::warn!(
                        "Sheet '{}' not found, writing {} as an empty section",
                        spec.sheet_name,
                        spec.tag
                    );
                    Vec::new()
                }
                None => return Err(VarnameError::MissingSheet(spec.sheet_name.to_string())),
            };
            tracing::debug!("{}: {} rows", spec.sheet_name, records.len());
            sections.push(SectionData::new(spec, records));
        }

        padder::pad_sections(&mut sections)?;
        Ok(sections)
    }

    /// Convert the workbook at `input` into a DAT file at `output`.
    ///
    /// The output file is only touched once every section has been extracted
    /// and padded successfully.
    pub fn convert_file<P: AsRef<Path>>(&self, input: P, output: P) -> Result<Vec<SectionSummary>> {
        let input = input.as_ref();
        let output = output.as_ref();

        let workbook = read_workbook(input)?;
        tracing::debug!(sheets = ?workbook.sheet_names(), "workbook loaded");

        let sections = self
            .build_sections(&workbook)
            .with_context(|| format!("Failed to build sections from {}", input.display()))?;

        writer::write_dat_file(output, &sections, self.config.output.line_ending)?;
        tracing::info!("Wrote {}", output.display());

        Ok(sections.iter().map(SectionSummary::from).collect())
    }
}

impl Default for VarnameParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{CellValue, Sheet};
    use std::path::PathBuf;

    fn workbook_with_sections() -> Workbook {
        let mut sheets: Vec<Sheet> = SECTIONS.iter().map(|s| Sheet::new(s.sheet_name)).collect();
        sheets.insert(0, Sheet::new("Cover"));
        Workbook {
            path: PathBuf::from("tracker.xlsx"),
            sheets,
        }
    }

    #[test]
    fn test_build_sections() {
        let mut workbook = workbook_with_sections();
        let b_var = workbook.sheets.iter_mut().find(|s| s.name == "B VAR").unwrap();
        b_var.set_cell(9, 0, CellValue::Number(1.0));
        b_var.set_cell(9, 1, CellValue::Text("FOO".to_string()));

        let sections = VarnameParser::new().build_sections(&workbook).unwrap();

        assert_eq!(sections.len(), SECTIONS.len());
        assert_eq!(sections[0].records, vec![Record::new("0001", Some("FOO"))]);
        assert_eq!(sections[0].padding, 1999);
        let summary = SectionSummary::from(&sections[0]);
        assert_eq!(summary.named, 1);
        assert_eq!(summary.span, 2001);
    }

    #[test]
    fn test_missing_sheet() {
        let mut workbook = workbook_with_sections();
        workbook.sheets.retain(|s| s.name != "TM VAR");

        let err = VarnameParser::new().build_sections(&workbook).unwrap_err();
        assert!(matches!(err, VarnameError::MissingSheet(ref name) if name == "TM VAR"));

        let mut config = ParserConfig::default();
        config.validation.allow_missing_sheets = true;
        let sections = VarnameParser::with_config(config)
            .build_sections(&workbook)
            .unwrap();
        assert!(sections[6].records.is_empty());
        assert_eq!(sections[6].padding, 10000);
    }
}
