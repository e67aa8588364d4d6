//! VARNAME.DAT serialization

use crate::config::LineEnding;
use crate::padder::{Line, SectionData};
use crate::section::{self, VARNAME_MARKER};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the DAT layout for padded `sections`
pub fn write_dat<W: Write>(
    out: &mut W,
    sections: &[SectionData],
    line_ending: LineEnding,
) -> io::Result<()> {
    let eol = line_ending.as_str();

    write!(out, "{}{}", VARNAME_MARKER, eol)?;
    write!(out, "{}{}", section::share_declaration(), eol)?;

    for data in sections {
        write!(out, "{}{}", data.spec.tag, eol)?;
        for line in data.lines() {
            match line {
                Line::Record(record) => match &record.name {
                    Some(name) => write!(out, "{} 1,0,{}{}", record.id, name, eol)?,
                    None => out.write_all(eol.as_bytes())?,
                },
                Line::Padding => out.write_all(eol.as_bytes())?,
            }
        }
    }

    Ok(())
}

/// Write the DAT file at `path`, truncating any previous content
pub fn write_dat_file(path: &Path, sections: &[SectionData], line_ending: LineEnding) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_dat(&mut out, sections, line_ending)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::Record;
    use crate::padder::pad_sections;
    use crate::section::{PADDING_BOUNDARIES, SECTIONS};

    fn render(sections: &[SectionData], line_ending: LineEnding) -> String {
        let mut buf = Vec::new();
        write_dat(&mut buf, sections, line_ending).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn padded(records: Vec<(usize, Record)>) -> Vec<SectionData> {
        let mut sections: Vec<_> = SECTIONS
            .iter()
            .map(|spec| SectionData::new(*spec, Vec::new()))
            .collect();
        for (index, record) in records {
            sections[index].records.push(record);
        }
        pad_sections(&mut sections).unwrap();
        sections
    }

    #[test]
    fn test_static_header() {
        let out = render(&padded(Vec::new()), LineEnding::Lf);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("//VARNAME"));
        assert_eq!(
            lines.next(),
            Some("///SHARE 2000,2000,2000,2000,2000,10000,10000,10000")
        );
        assert_eq!(lines.next(), Some("///B"));
    }

    #[test]
    fn test_record_rendering() {
        let sections = padded(vec![
            (0, Record::new("0007", Some("GRIP_OPEN"))),
            (0, Record::new("0008", None)),
        ]);
        let out = render(&sections, LineEnding::Lf);

        assert!(out.starts_with("//VARNAME\n///SHARE"));
        assert!(out.contains("///B\n0007 1,0,GRIP_OPEN\n\n"));
        assert!(!out.contains("0008"));
    }

    #[test]
    fn test_headers_land_on_boundaries() {
        let sections = padded(vec![
            (0, Record::new("0001", Some("FOO"))),
            (7, Record::new("0002", Some("BAR"))),
        ]);
        let out = render(&sections, LineEnding::Lf);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), section::total_lines());
        assert!(out.ends_with('\n'));
        for (i, spec) in SECTIONS.iter().enumerate() {
            // Boundaries are 1-based line numbers
            assert_eq!(lines[PADDING_BOUNDARIES[i] - 1], spec.tag);
        }
        assert_eq!(lines[3], "0001 1,0,FOO");
        assert_eq!(lines[PADDING_BOUNDARIES[7]], "0002 1,0,BAR");
    }

    #[test]
    fn test_crlf_line_endings() {
        let sections = padded(vec![(1, Record::new("0003", Some("BAZ")))]);
        let out = render(&sections, LineEnding::Crlf);

        assert!(out.starts_with("//VARNAME\r\n///SHARE"));
        assert!(out.contains("///I\r\n0003 1,0,BAZ\r\n\r\n"));
        assert_eq!(out.matches("\r\n").count(), section::total_lines());
        assert_eq!(out.matches('\n').count(), section::total_lines());
    }
}
