//! Command line front end for the MiGo scanner.
//!
//! Scans a file (or standard input) and lists its tokens, or scans line by line in
//! a small REPL. Logging goes through `pretty_env_logger`, configured via `RUST_LOG`.
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};

use rust_migo::migo::errors::EngineError;
use rust_migo::migo::listing::TokenListing as _;
use rust_migo::migo::token::scanner::{self, Scanner};
use rust_migo::migo::token::tokens::Token;

use std::fs;
use std::io::{self, Error as IOError, Read as _, Write as _};
use std::process::{ExitCode, Termination};

/// Reads the whole source, with `-` standing for standard input.
fn read_source(file: &str) -> Result<String, IOError> {
    if file == "-" {
        let mut source = String::new();
        let _: usize = io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(file)
    }
}

/// Prints a single token in the requested format.
fn print_token(token: &Token, format: OutputFormat) {
    match format {
        OutputFormat::Listing => println!("{}", token.listing()),
        OutputFormat::Debug => println!("{token:?}"),
    }
}

/// Load a file and list its tokens.
fn run_file(file: &str, format: OutputFormat) -> Result<(), EngineError> {
    let source = read_source(file)?;
    info!("scanning {file} ({} bytes)", source.len());
    let tokens = scanner::tokenize(source).map_err(EngineError::LexingErrors)?;

    for token in &tokens {
        print_token(token, format);
    }
    Ok(())
}

/// Run the REPL Prompt, scanning each line on its own until standard input ends.
fn run_prompt(format: OutputFormat) -> Result<(), IOError> {
    let mut line = String::new();
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            debug!("end of input, leaving the REPL");
            println!();
            break Ok(());
        }

        let mut scanner = Scanner::for_source(&line);
        loop {
            let token = scanner.next_token();
            print_token(&token, format);
            if token.is_end() {
                break;
            }
        }
    }
}

/// Isomorphic to `Result<T, EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
///
/// As this is only supposed to be used on the very
/// outer shell, T defaults to `()`.
#[derive(Debug)]
enum EngineResult<T = ()> {
    /// Ok variant.
    Ok(T),
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        if let EngineResult::Err(err) = self {
            eprintln!("{err}");
            err.into()
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl<T, E> From<Result<T, E>> for EngineResult<T>
where
    EngineError: From<E>,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => EngineResult::Ok(value),
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// How tokens are printed.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// `span  NAME  payload`, one token per line.
    Listing,
    /// The Rust debug representation of each token.
    Debug,
}

/// rust-migo scans MiGo process specifications and lists the tokens a parser
/// would see: keywords, names, numbers and punctuation, each with its source span.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct MigoArgs {
    /// Subcommands, either this or [`source_file`] needs to be specified.
    #[command(subcommand)]
    command: Option<MigoCommands>,

    /// Source File for the program, `-` reads standard input.
    #[arg(required = true)]
    source_file: Option<String>,

    /// How to print tokens.
    #[arg(long, value_enum, env = "MIGO_FORMAT", default_value_t = OutputFormat::Listing, global = true)]
    format: OutputFormat,
}

/// Available commands in Rust-Migo
#[derive(Subcommand, Debug)]
#[command(subcommand_negates_reqs = true)]
enum MigoCommands {
    /// run the scanner repl, scanning each line on its own.
    Repl,
    /// tokenize the given file and print its tokens.
    Tokenize {
        source_file: String,
    },
}

fn main() -> EngineResult {
    pretty_env_logger::init();
    let MigoArgs {
        command,
        source_file,
        format,
    } = MigoArgs::parse();

    match (command, source_file) {
        (None, Some(source_file))
        | (Some(MigoCommands::Tokenize { source_file }), None) => run_file(&source_file, format).into(),

        (Some(MigoCommands::Repl), None) => run_prompt(format).into(),

        (Some(_), Some(_))
        | (None, None) => unreachable!("clap verifies this cannot happen."),
    }
}
