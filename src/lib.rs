pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use error::{CopyStage, DaySortError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{BucketWriter, ExtensionBucket, FileCopier, RunSummary};
pub use scanner::{FileEntry, TargetDate, TreeWalker};
pub use ui::{OutputFormatter, OutputMode};

use log::{debug, info, trace};
use std::io;
use std::path::Path;

/// Main library interface: one configured sort run.
pub struct DaySort {
    config: Config,
    output_formatter: OutputFormatter,
    dry_run: bool,
}

impl DaySort {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Create a DaySort instance from CLI arguments. Fails if the configuration cannot be loaded.
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        debug!("loaded configuration from {}", cli_args.config.display());

        Ok(Self::new(config, cli_args.output_mode(), cli_args.verbose, cli_args.quiet)
            .with_dry_run(cli_args.dry_run))
    }

    /// Runs setup, then walks the source tree and copies every file from the target date.
    ///
    /// Setup failures are returned; per-file failures are reported and counted.
    pub fn run(&self) -> Result<RunSummary> {
        let writer = BucketWriter::new(self.config.target_path());

        if self.dry_run {
            self.output_formatter
                .notice("Dry run: no directory or file will be written");
        } else {
            writer.initialize()?;
        }

        let target_date = self.config.target_date()?;

        self.output_formatter.stage(&format!(
            "Copying files from {} modified on {}",
            self.config.source_dir, target_date
        ));
        self.output_formatter
            .detail(&format!("Target directory: {}", writer.target_root().display()));
        info!(
            "sorting {} into {} for {}",
            self.config.source_dir, self.config.target_dir, target_date
        );

        let mut summary = RunSummary::new();
        let mut walker = TreeWalker::new(self.config.source_path());

        for entry in walker.by_ref() {
            if entry.is_dir {
                continue;
            }

            if !target_date.matches(entry.modified) {
                trace!("{} is from another day", entry.path.display());
                continue;
            }

            summary.record_match();
            self.process_entry(&writer, &entry, &mut summary);
        }

        summary.walk = walker.statistics().clone();
        self.output_formatter.summary(&summary);

        Ok(summary)
    }

    fn process_entry(&self, writer: &BucketWriter, entry: &FileEntry, summary: &mut RunSummary) {
        let placement = writer.placement_for(entry);

        if self.dry_run {
            self.output_formatter
                .planned(&entry.path, &placement.destination);
            summary.record_planned(&placement.bucket);
            return;
        }

        match writer.place(entry, &placement) {
            Ok(bytes) => {
                self.output_formatter
                    .copied(&entry.path, &placement.destination);
                summary.record_copy(&placement.bucket, bytes);
            }
            Err(e) => {
                debug!("{:?}", e);
                self.handle_error(&e);
                summary.record_failure(&e);
            }
        }
    }

    /// Generate sample configuration file. An existing file is left alone.
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();
        if output_path.exists() {
            return Err(DaySortError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", output_path.display()),
            )));
        }

        std::fs::write(output_path, Config::create_sample_config() + "\n")?;
        Ok(())
    }

    /// Fatal errors get the full diagnostic with a suggestion; per-file ones a single line.
    pub fn handle_error(&self, error: &DaySortError) {
        if error.is_fatal() {
            self.output_formatter.fatal(error);
        } else {
            self.output_formatter.item_failed(error);
        }
    }
}
