//! Fixed section table of the VARNAME.DAT layout
//!
//! The controller reads variables by absolute line position, so every section
//! owns a fixed span of lines. Section `i` starts (header line included) at the
//! 1-based line `PADDING_BOUNDARIES[i]` and ends right before
//! `PADDING_BOUNDARIES[i + 1]`.

/// A section of the DAT file and the workbook sheet it is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Name of the workbook sheet holding the section's variables
    pub sheet_name: &'static str,
    /// Header line written before the section's data
    pub tag: &'static str,
}

/// Sections in output order
pub const SECTIONS: [SectionSpec; 8] = [
    SectionSpec { sheet_name: "B VAR", tag: "///B" },
    SectionSpec { sheet_name: "I VAR", tag: "///I" },
    SectionSpec { sheet_name: "D VAR", tag: "///D" },
    SectionSpec { sheet_name: "R VAR", tag: "///R" },
    SectionSpec { sheet_name: "S VAR", tag: "///S" },
    SectionSpec { sheet_name: "P VAR", tag: "///P" },
    // Position variables of the TM sheet are registered as base-axis positions
    SectionSpec { sheet_name: "TM VAR", tag: "///BP" },
    SectionSpec { sheet_name: "EX VAR", tag: "///EX" },
];

/// Absolute line offsets delimiting each section
pub const PADDING_BOUNDARIES: [usize; SECTIONS.len() + 1] =
    [3, 2004, 4005, 6006, 8007, 10008, 20009, 30010, 40011];

/// First line of the file
pub const VARNAME_MARKER: &str = "//VARNAME";

/// Number of lines a section occupies, header included
pub fn span(index: usize) -> usize {
    PADDING_BOUNDARIES[index + 1] - PADDING_BOUNDARIES[index]
}

/// Number of variable lines a section can hold
pub fn capacity(index: usize) -> usize {
    span(index) - 1
}

/// The `///SHARE` line announcing each section's capacity
pub fn share_declaration() -> String {
    let capacities: Vec<String> = (0..SECTIONS.len())
        .map(|i| capacity(i).to_string())
        .collect();
    format!("///SHARE {}", capacities.join(","))
}

/// Total number of lines in a DAT file: the two static lines plus every span.
/// This is 40010, not 40012: the last section ends on the line before 40011.
pub fn total_lines() -> usize {
    2 + PADDING_BOUNDARIES[SECTIONS.len()] - PADDING_BOUNDARIES[0]
}
