use crate::sinks::{DEFAULT_COMPILER, DEFAULT_OUTFILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates an issue.toml manifest in the current directory
    Init(InitArgs),
    /// Compiles the book repository into a Kindle periodical
    Compile(CompileArgs),
    /// Lists the sections and articles of the book repository in reading order
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Book title (defaults to the directory name)
    #[arg(long)]
    pub title: Option<String>,
    /// Book author
    #[arg(long)]
    pub author: Option<String>,
    /// Language code, e.g. "en-us"
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// The book repository to compile
    #[arg(short, long, default_value = ".")]
    pub repository: PathBuf,
    /// Where to write the compiled periodical
    #[arg(short, long, default_value = DEFAULT_OUTFILE)]
    pub output: PathBuf,
    /// The kindlegen binary
    #[arg(long, env = "KIG_COMPILER", default_value = DEFAULT_COMPILER)]
    pub compiler: PathBuf,
    /// Give up on the compiler after this many seconds
    #[arg(long, env = "KIG_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The book repository to inspect
    #[arg(short, long, default_value = ".")]
    pub repository: PathBuf,
    /// Print the book structure as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn compile_has_defaults() {
        let cli = Cli::try_parse_from(["kig", "compile"]).expect("can parse");
        match cli.command {
            Commands::Compile(args) => {
                assert_eq!(args.repository, PathBuf::from("."));
                assert_eq!(args.output, PathBuf::from(DEFAULT_OUTFILE));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(Cli::try_parse_from(["kig", "publish"]).is_err());
    }
}
