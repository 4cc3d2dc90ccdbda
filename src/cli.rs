use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daysort")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Copy files modified on a given day into folders named by extension")]
#[command(
    long_about = "DaySort walks sourceDir, picks every file whose modification date (local time) \
                  equals sourceDate, and copies it to targetDir/<extension>/<file name>. \
                  Settings are read from a JSON configuration file."
)]
#[command(after_help = "EXAMPLES:\n  \
    daysort\n  \
    daysort --config ~/sort-camera.json --verbose\n  \
    daysort --dry-run\n  \
    daysort --generate-config --config new-config.json")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, help = "Path to JSON configuration file")]
    pub config: PathBuf,

    /// Output format for status lines
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be copied without writing anything)
    #[arg(long, help = "Show what would be copied without creating any file or directory")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Write a sample configuration file to the --config path")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_file(&self.config)
    }

    pub fn output_mode(&self) -> OutputMode {
        match self.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }

    /// Default `RUST_LOG` filter for this verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 | 1 => "daysort=warn",
            2 => "daysort=debug",
            _ => "daysort=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["daysort"]);
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.dry_run);
        assert!(!cli.generate_config);
        assert_eq!(cli.output_mode(), OutputMode::Human);
    }

    #[test]
    fn test_custom_config() {
        let cli = Cli::parse_from(["daysort", "-c", "/etc/daysort.json"]);
        assert_eq!(cli.config, PathBuf::from("/etc/daysort.json"));
    }

    #[test]
    fn test_plain_output_and_dry_run() {
        let cli = Cli::parse_from(["daysort", "--output-format", "plain", "--dry-run"]);
        assert_eq!(cli.output_mode(), OutputMode::Plain);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["daysort", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_log_filter_follows_verbosity() {
        assert_eq!(Cli::parse_from(["daysort"]).log_filter(), "daysort=warn");
        assert_eq!(Cli::parse_from(["daysort", "-vv"]).log_filter(), "daysort=debug");
        assert_eq!(Cli::parse_from(["daysort", "-vvv"]).log_filter(), "daysort=trace");
    }
}
