//! Section padding to the fixed line boundaries

use crate::error::VarnameError;
use crate::extractor::Record;
use crate::section::{self, SectionSpec};

/// A line of section data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Record(&'a Record),
    Padding,
}

/// Records of one section plus the blank lines filling its span
#[derive(Debug, Clone, PartialEq)]
pub struct SectionData {
    pub spec: SectionSpec,
    pub records: Vec<Record>,
    /// Blank lines appended after the records
    pub padding: usize,
}

impl SectionData {
    pub fn new(spec: SectionSpec, records: Vec<Record>) -> Self {
        Self {
            spec,
            records,
            padding: 0,
        }
    }

    /// Lines written for this section, header included
    pub fn line_count(&self) -> usize {
        1 + self.records.len() + self.padding
    }

    /// Number of records carrying a name
    pub fn named_count(&self) -> usize {
        self.records.iter().filter(|r| r.name.is_some()).count()
    }

    /// Records followed by padding, in output order
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.records
            .iter()
            .map(Line::Record)
            .chain(std::iter::repeat_n(Line::Padding, self.padding))
    }
}

/// Pad every section so its line count equals its span. `sections` must be in
/// the order of [`section::SECTIONS`].
pub fn pad_sections(sections: &mut [SectionData]) -> Result<(), VarnameError> {
    if sections.len() != section::SECTIONS.len() {
        return Err(VarnameError::SectionCount {
            expected: section::SECTIONS.len(),
            found: sections.len(),
        });
    }

    for (index, data) in sections.iter_mut().enumerate() {
        let span = section::span(index);
        let current = data.records.len() + 1;

        if current > span {
            return Err(VarnameError::SectionOverflow {
                section: data.spec.sheet_name.to_string(),
                lines: current,
                span,
                overflow: current - span,
            });
        }

        data.padding = span - current;
        tracing::info!(
            "Padding {} ({}): {} lines used, {} blank lines added",
            data.spec.sheet_name,
            data.spec.tag,
            current,
            data.padding
        );
    }
    Ok(())
}
