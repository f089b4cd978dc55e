//! Command-line front end for the lexical analyzer.
//!
//! Loads a source file (or standard input), scans it and prints or exports
//! the resulting tokens and errors.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lexical_analyzer::{
    automata::automata::write_all as write_diagrams,
    config::config::Config,
    lexer::{
        lexer::{scan_with, ScanOutput},
        tokens::TokenCategory,
    },
    load_source, read_source_until_end, render_diagnostic,
    report::report::{export_to_files, render_category, render_errors, render_tokens},
};

#[derive(Parser, Debug)]
#[command(name = "lexical_analyzer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan source text into keywords, identifiers, numbers, operators and punctuation")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXICAL_ANALYZER_VERBOSE")]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "LEXICAL_ANALYZER_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token, or only the tokens of one category
    Tokens {
        /// Source file, or `-` to read standard input until a line `END`
        source: PathBuf,

        /// Category name (keyword, identifier, number, operator, punctuation) or menu number 1-5
        #[arg(short = 'C', long)]
        category: Option<TokenCategory>,
    },

    /// Print the rejected lexemes
    Errors {
        source: PathBuf,

        /// Show each error with its source line and a suggestion
        #[arg(long)]
        explain: bool,
    },

    /// Write tokens and errors to two text files
    Export {
        source: PathBuf,

        /// Token listing (default: Token.txt)
        #[arg(long)]
        tokens: Option<PathBuf>,

        /// Error listing (default: Error.txt)
        #[arg(long)]
        errors: Option<PathBuf>,
    },

    /// Write Graphviz diagrams of the recognizers
    Automata {
        #[arg(short, long, default_value = "automata_diagrams")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    execute_command(cli.command, config)
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Tokens { source, category } => {
            let (_, output) = analyze(&source, &config)?;
            let rendered = match category {
                Some(category) => render_category(&output.tokens, category),
                None => render_tokens(&output.tokens),
            };
            stdout.write_all(rendered.as_bytes())?;
        }
        Commands::Errors { source, explain } => {
            let (text, output) = analyze(&source, &config)?;
            if explain && !output.errors.is_empty() {
                for error in &output.errors {
                    stdout.write_all(render_diagnostic(error, &text, &source).as_bytes())?;
                }
            } else {
                stdout.write_all(render_errors(&output.errors).as_bytes())?;
            }
        }
        Commands::Export { source, tokens, errors } => {
            let (_, output) = analyze(&source, &config)?;
            let tokens = tokens.unwrap_or(config.export.tokens);
            let errors = errors.unwrap_or(config.export.errors);
            export_to_files(&output, &tokens, &errors)?;
            writeln!(
                stdout,
                "Tokens and errors have been exported to {} and {}.",
                tokens.display(),
                errors.display()
            )?;
        }
        Commands::Automata { out } => {
            for path in write_diagrams(&out)? {
                writeln!(stdout, "Generated: {}", path)?;
            }
        }
    }

    Ok(())
}

fn analyze(source: &Path, config: &Config) -> Result<(String, ScanOutput)> {
    let text = if source == Path::new("-") {
        read_source_until_end(io::stdin().lock())?
    } else {
        load_source(source).with_context(|| format!("Failed to open file: {}", source.display()))?
    };

    let start = Instant::now();
    let output = scan_with(&text, config.scan);
    info!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "Scanned in {:?}",
        start.elapsed()
    );

    Ok((text, output))
}
