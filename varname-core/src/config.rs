//! Configuration for a conversion run

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the file written into the output subdirectory
pub const OUTPUT_FILE_NAME: &str = "VARNAME.DAT";

/// Main parser configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl ParserConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: ParserConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path of the variable tracker workbook
    pub fn input_path(&self) -> Result<PathBuf> {
        Ok(self.paths.data_dir()?.join(self.paths.var_tracker_fname()?))
    }

    /// Directory the DAT file is written into
    pub fn output_dir(&self) -> Result<PathBuf> {
        Ok(self.paths.out_dir()?.join(self.paths.out_subdir()?))
    }

    /// Full path of the DAT file
    pub fn output_path(&self) -> Result<PathBuf> {
        Ok(self.output_dir()?.join(OUTPUT_FILE_NAME))
    }
}

/// Input and output locations. All four are required for a run, either from
/// the config file or from the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    pub var_tracker_fname: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub out_subdir: Option<PathBuf>,
}

impl PathsConfig {
    pub fn var_tracker_fname(&self) -> Result<&str> {
        self.var_tracker_fname
            .as_deref()
            .context("Missing required option: var_tracker_fname")
    }

    pub fn data_dir(&self) -> Result<&Path> {
        self.data_dir
            .as_deref()
            .context("Missing required option: dataDir")
    }

    pub fn out_dir(&self) -> Result<&Path> {
        self.out_dir
            .as_deref()
            .context("Missing required option: outDir")
    }

    pub fn out_subdir(&self) -> Result<&Path> {
        self.out_subdir
            .as_deref()
            .context("Missing required option: outSubdir")
    }

    /// Overlay values that are set in `other`
    pub fn merge(&mut self, other: PathsConfig) {
        if other.var_tracker_fname.is_some() {
            self.var_tracker_fname = other.var_tracker_fname;
        }
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.out_dir.is_some() {
            self.out_dir = other.out_dir;
        }
        if other.out_subdir.is_some() {
            self.out_subdir = other.out_subdir;
        }
    }
}

/// Where the variables sit inside each section sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rows at the top of the sheet used as column labels
    pub label_rows: u32,
    /// First data row, counted below the label rows
    pub data_offset: u32,
    /// Column holding the variable number
    pub id_column: u32,
    /// Column holding the variable name
    pub name_column: u32,
    /// Width the variable number is zero-filled to
    pub id_width: usize,
}

impl LayoutConfig {
    /// Absolute 0-based worksheet row of the first variable
    pub fn first_data_row(&self) -> u32 {
        self.label_rows + self.data_offset
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            label_rows: 1,
            data_offset: 8,
            id_column: 0,
            name_column: 1,
            id_width: 4,
        }
    }
}

/// Line terminator used in the DAT file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub line_ending: LineEnding,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject named variables whose number is not a plain integer that fits the id width
    pub strict_identifiers: bool,
    /// Emit an all-blank section instead of failing when a section sheet is absent
    pub allow_missing_sheets: bool,
}
