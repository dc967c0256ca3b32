//! jessy CLI
//!
//! Usage:
//!   jessy [OPTIONS] [FILE]
//!
//! Reads a jessy file (or stdin) and prints JavaScript or Sass.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jessy::pipeline::read_source;
use jessy::{Jessy, JessyError, Options, PartialOptions, Target};

#[derive(Parser)]
#[command(name = "jessy")]
#[command(about = "Compile jessy config files into JavaScript or Sass variables")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output target: "js", or any stylesheet name such as "sass"
    #[arg(short, long)]
    target: Option<String>,

    /// Container name or dotted path for the JavaScript output
    #[arg(short, long)]
    namespace: Option<String>,

    /// Reference marker and Sass variable prefix
    #[arg(long)]
    symbol: Option<String>,

    /// Quote character for string values
    #[arg(short, long)]
    quotes: Option<String>,

    /// Wrap dotted-namespace output in a strict-mode closure
    #[arg(short, long)]
    closure: bool,

    /// Leave $references untouched
    #[arg(long)]
    no_solve: bool,

    /// Indentation unit
    #[arg(long)]
    tab: Option<String>,

    /// Options file (JSON); command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved tree as JSON instead of rendering it
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<Options, JessyError> {
        let base = match &self.config {
            Some(path) => Options::from_json_file(path)?,
            None => Options::default(),
        };

        Ok(base.overlay(PartialOptions {
            symbol: self.symbol.clone(),
            namespace: self.namespace.clone(),
            target: self.target.as_deref().map(Target::from_name),
            quotes: self.quotes.clone(),
            closure: self.closure.then_some(true),
            solve: self.no_solve.then_some(false),
            tab: self.tab.clone(),
        }))
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(&cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<(), JessyError> {
    let jessy = Jessy::new(cli.options()?);

    let source = match &cli.input {
        Some(path) => read_source(path)?,
        None => read_stdin()?,
    };

    let output = if cli.json {
        jessy.to_json(&source)?
    } else {
        jessy.run(&source)?
    };

    println!("{}", output);
    Ok(())
}

fn read_stdin() -> Result<String, JessyError> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| JessyError::from_io_error(&e, "<stdin>"))?;
    Ok(buffer)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
