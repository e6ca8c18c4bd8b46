// src/args.rs
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use arxiv_gate_core::GateError;

pub const USAGE: &str = "Usage: arxiv_gate [OPTIONS] [--] <query> <max_results> <output_dir>";
pub const EXAMPLE: &str = "Example: arxiv_gate 'cat:cs.LG' 10 ./output";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "arxiv_gate",
    version,
    about = "Validate arguments and run the arXiv processor container",
    after_help = "Exactly three arguments are always taken as <query> <max_results> <output_dir>, \
                  even when the query looks like a flag. With options, put `--` before a query \
                  that starts with a hyphen."
)]
pub struct Args {
    /// Search query, forwarded verbatim
    #[arg(value_name = "query", allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub query: OsString,

    /// Number of results to fetch (1-100)
    #[arg(value_name = "max_results", allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub max_results: OsString,

    /// Host directory mounted as the processor's output directory
    #[arg(value_name = "output_dir", allow_hyphen_values = true, value_parser = clap::value_parser!(PathBuf))]
    pub output_dir: PathBuf,

    /// Container runtime executable [env: ARXIV_GATE_RUNTIME]
    #[arg(long, value_name = "PROGRAM")]
    pub runtime: Option<String>,

    /// Processor image [env: ARXIV_GATE_IMAGE]
    #[arg(long)]
    pub image: Option<String>,

    /// Container name [env: ARXIV_GATE_CONTAINER_NAME]
    #[arg(long)]
    pub name: Option<String>,

    /// Print the planned container invocation as JSON and exit
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    fn positional(query: OsString, max_results: OsString, output_dir: OsString) -> Self {
        Self {
            query,
            max_results,
            output_dir: output_dir.into(),
            runtime: None,
            image: None,
            name: None,
            dry_run: false,
        }
    }
}

/// Outcome of command-line parsing.
#[derive(Debug)]
pub enum Parsed {
    Run(Args),
    /// Help or version was requested; clap prints it.
    Info(clap::Error),
    /// Wrong number of positional arguments or an unknown flag.
    Usage(GateError),
}

/// Parse the full argv, program name first.
///
/// Exactly three arguments bypass option parsing so a query such as `-h`
/// or `--dry-run` still reaches the processor.
pub fn parse_from<I, T>(argv: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    if let [_, query, max_results, output_dir] = argv.as_slice() {
        return Parsed::Run(Args::positional(
            query.clone(),
            max_results.clone(),
            output_dir.clone(),
        ));
    }

    match Args::try_parse_from(&argv) {
        Ok(args) => Parsed::Run(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Parsed::Info(err)
        }
        Err(err) => {
            tracing::debug!(error = %err, "rejected command line");
            let found = positional_count(argv.get(1..).unwrap_or_default());
            Parsed::Usage(GateError::Arity { found })
        }
    }
}

/// Arguments that are not options or option values.
fn positional_count(args: &[OsString]) -> usize {
    let mut count = 0;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.to_str() {
            Some("--") => return count + iter.count(),
            Some("--runtime" | "--image" | "--name") => {
                iter.next();
            }
            Some(flag) if flag.starts_with("--") => {}
            Some("-h" | "-V") => {}
            _ => count += 1,
        }
    }
    count
}
