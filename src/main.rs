use anyhow::{Context, Result};
use cli::Cli;
use indicatif::{ProgressBar, ProgressStyle};
use sinks::Mobi;
use std::process::ExitCode;
use std::time::Duration;

mod cli;
mod error;
mod file_ordering;
mod init;
mod inspect;
mod markup;
mod sinks {
    mod mobi;
    pub use mobi::{Mobi, DEFAULT_COMPILER, DEFAULT_OUTFILE};
}
mod source;

/// Exit status when the compiler, rather than the input, is at fault.
const TOOLCHAIN_FAILURE: u8 = 3;

fn main() -> ExitCode {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = try_main(cli) {
        eprintln!("{}: {e:#}", console::style("Error").red());
        match e.downcast_ref::<error::Error>() {
            Some(e) if e.is_toolchain() => ExitCode::from(TOOLCHAIN_FAILURE),
            _ => ExitCode::FAILURE,
        }
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "kig=debug" } else { "kig=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_main(cli: Cli) -> Result<()> {
    match &cli.command {
        cli::Commands::Init(args) => init::run(args),
        cli::Commands::Inspect(args) => inspect::run(args),
        cli::Commands::Compile(args) => {
            println!("Loading {}...", args.repository.display());
            let issue = source::Issue::load(&args.repository).with_context(|| {
                format!(
                    "Failed to load book repository {}",
                    args.repository.display()
                )
            })?;

            let mobi = Mobi {
                outfile: args.output.clone(),
                compiler: args.compiler.clone(),
                timeout: args.timeout.map(Duration::from_secs),
            };

            let progress = ProgressBar::new(issue.article_count() as u64);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("can parse progress style")
                    .progress_chars("#>-"),
            );

            let stats = mobi
                .render(&issue, &progress)
                .with_context(|| "Failed to compile periodical")?;

            println!();
            println!("  Periodical: {}", stats.outfile.display());
            println!(
                "  Contents:   {} sections, {} articles ({} documents)",
                issue.sections.len(),
                issue.article_count(),
                stats.document_count
            );
            Ok(())
        }
    }
}
