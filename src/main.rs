use clap::Parser;
use std::path::PathBuf;
use tagstrip::application::{StripFilesService, StripOptions};
use tagstrip::cli::{format_outcome, format_summary, Cli};
use tagstrip::domain::TagStripper;
use tagstrip::error::TagStripError;
use tagstrip::infrastructure::{collect_targets, Config};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();
}

fn run(cli: Cli) -> Result<(), TagStripError> {
    let cwd = std::env::current_dir().map_err(|source| TagStripError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    let config = Config::load_from_dir(&cwd)?.with_overrides(Config::env_tag(), cli.tag);

    let tag = config.wrapper_tag()?;
    tracing::debug!(%tag, "stripping wrapper tag");

    let targets = collect_targets(&cli.paths, &config)?;
    if targets.is_empty() {
        tracing::warn!("no matching files found");
        println!("No files to process");
        return Ok(());
    }

    let service = StripFilesService::new(
        TagStripper::new(tag)?,
        StripOptions {
            dry_run: cli.dry_run,
        },
    );

    let report = service.execute(&targets, |outcome| {
        println!("{}", format_outcome(outcome, cli.dry_run));
    })?;

    if report.dry_run || report.outcomes.len() > 1 {
        println!("{}", format_summary(&report));
    }

    Ok(())
}
