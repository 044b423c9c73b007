use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{display_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a source file and print its syntax tree.
#[derive(Parser, Debug)]
#[command(name = "frontend")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Print the full AST structure instead of S-expressions
    #[arg(long)]
    ast: bool,

    /// Print timings for each phase
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file_name = cli.file.to_string_lossy().into_owned();
    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", file_name, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    info!(tokens = tokens.len(), "tokenized {}", file_name);
    if cli.verbose {
        println!("Tokenized in {:?}", start.elapsed());
    }

    if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let unit = match parse(&tokens) {
        Ok(unit) => unit,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        println!("Parsed in {:?}", parse_start.elapsed());
    }

    if cli.ast {
        println!("{:#?}", unit);
    } else {
        println!("{}", unit);
    }

    if cli.verbose {
        println!("Total time: {:?}", start.elapsed());
    }

    ExitCode::SUCCESS
}
