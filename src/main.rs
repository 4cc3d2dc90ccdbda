use clap::Parser;
use daysort::{Cli, DaySort, DaySortError, OutputFormatter};

// Every path returns normally; failures are reported on the console only.
fn main() {
    let cli = Cli::parse();
    setup_logging(&cli);

    if cli.generate_config {
        handle_generate_config(&cli);
        return;
    }

    let daysort = match DaySort::from_cli(&cli) {
        Ok(daysort) => daysort,
        Err(e) => {
            print_startup_error(&cli, &e);
            return;
        }
    };

    if let Err(e) = daysort.run() {
        daysort.handle_error(&e);
    }
}

fn handle_generate_config(cli: &Cli) {
    let formatter = OutputFormatter::new(cli.output_mode(), cli.verbose, cli.quiet);

    match DaySort::generate_sample_config(&cli.config) {
        Ok(()) => {
            formatter.done(&format!(
                "Generated sample configuration file: {}",
                cli.config.display()
            ));
            formatter.notice(&format!(
                "Edit sourceDir, targetDir and sourceDate, then run: daysort --config {}",
                cli.config.display()
            ));
        }
        Err(e) => formatter.fatal(&e),
    }
}

fn print_startup_error(cli: &Cli, error: &DaySortError) {
    OutputFormatter::new(cli.output_mode(), 0, false).fatal(error);
}

fn setup_logging(cli: &Cli) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();
}
