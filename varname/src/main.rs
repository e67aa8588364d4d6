use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use varname_core::config::PathsConfig;
use varname_core::{ParserConfig, VarnameParser};

mod formatter;

#[derive(Parser)]
#[command(name = "varname")]
#[command(about = "Write the controller VARNAME.DAT file from an Excel variable tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// File name of the Excel variable tracker, e.g. 792164-1-1_CDS_VAR_Rev.0.xlsx
    #[arg(long = "var_tracker_fname", value_name = "FILE")]
    var_tracker_fname: Option<String>,

    /// Directory holding the variable tracker
    #[arg(long = "dataDir", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output directory for the DAT file
    #[arg(long = "outDir", value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Subdirectory of the output directory this run writes into
    #[arg(long = "outSubdir", value_name = "DIR")]
    out_subdir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored table
    Human,
    /// JSON document
    Json,
}

impl Cli {
    fn paths(&self) -> PathsConfig {
        PathsConfig {
            var_tracker_fname: self.var_tracker_fname.clone(),
            data_dir: self.data_dir.clone(),
            out_dir: self.out_dir.clone(),
            out_subdir: self.out_subdir.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("varname=debug,varname_core=debug")
        } else {
            EnvFilter::new("varname=info,varname_core=info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let input_path = confirm_directories(&config)?;
    let output_path = config.output_path()?;

    let parser = VarnameParser::with_config(config);
    let summaries = parser
        .convert_file(&input_path, &output_path)
        .with_context(|| format!("Failed to convert {}", input_path.display()))?;

    match cli.format {
        OutputFormat::Human => formatter::print_human(&input_path, &output_path, &summaries),
        OutputFormat::Json => formatter::print_json(&input_path, &output_path, &summaries)?,
    }

    Ok(())
}

/// Load the config file, then let command line paths override it
fn load_config(cli: &Cli) -> Result<ParserConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        ParserConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("varname.toml");
        if default_config_path.exists() {
            ParserConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            ParserConfig::default()
        }
    };

    config.paths.merge(cli.paths());
    tracing::debug!(?config, "configuration");
    Ok(config)
}

/// Create the data and output directories when absent and return the input
/// path, failing when the variable tracker does not exist
fn confirm_directories(config: &ParserConfig) -> Result<PathBuf> {
    ensure_dir(config.paths.data_dir()?)?;
    ensure_dir(config.paths.out_dir()?)?;
    ensure_dir(&config.output_dir()?)?;

    let input_path = config.input_path()?;
    if !input_path.exists() {
        anyhow::bail!(
            "File does not exist: check for <<{}>> in dataDir: <<{}>>",
            config.paths.var_tracker_fname()?,
            config.paths.data_dir()?.display()
        );
    }
    Ok(input_path)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        tracing::info!("Directory created: {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(root: &Path, fname: &str) -> ParserConfig {
        let mut config = ParserConfig::default();
        config.paths = PathsConfig {
            var_tracker_fname: Some(fname.to_string()),
            data_dir: Some(root.join("data")),
            out_dir: Some(root.join("out")),
            out_subdir: Some(PathBuf::from("text_parser_project")),
        };
        config
    }

    #[test]
    fn test_cli_flags_keep_original_spelling() {
        let cli = Cli::parse_from([
            "varname",
            "--var_tracker_fname",
            "tracker.xlsx",
            "--dataDir",
            "data/",
            "--outDir",
            "out/",
            "--outSubdir",
            "text_parser_project/",
        ]);
        let paths = cli.paths();
        assert_eq!(paths.var_tracker_fname.as_deref(), Some("tracker.xlsx"));
        assert_eq!(paths.data_dir, Some(PathBuf::from("data/")));
        assert_eq!(paths.out_subdir, Some(PathBuf::from("text_parser_project/")));
    }

    #[test]
    fn test_missing_input_creates_directories_only() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path(), "missing.xlsx");

        let err = confirm_directories(&config).unwrap_err();

        assert!(err.to_string().contains("missing.xlsx"));
        assert!(dir.path().join("data").is_dir());
        assert!(dir.path().join("out").join("text_parser_project").is_dir());
        assert!(!config.output_path().unwrap().exists());
    }

    #[test]
    fn test_existing_input_is_resolved() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path(), "tracker.xlsx");
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data").join("tracker.xlsx"), b"").unwrap();

        let input = confirm_directories(&config).unwrap();
        assert_eq!(input, dir.path().join("data").join("tracker.xlsx"));
    }
}
