//! pql CLI
//!
//! Command-line tool for tokenizing and checking PQL queries.

use std::io::Read;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use pql_core::{Lexer, LexerConfig, NumericGrammar, Token};

mod render;

/// Tokenize PQL search filter queries.
#[derive(Parser)]
#[command(name = "pql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Numeric literal grammar.
    #[arg(
        short,
        long,
        env = "PQL_NUMERIC_GRAMMAR",
        value_enum,
        default_value_t = Numeric::Strict,
        global = true
    )]
    numeric: Numeric,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a query.
    Tokenize {
        /// The query (read from stdin if not specified).
        query: Option<String>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Fail on the first unrecognized token.
        #[arg(long)]
        strict: bool,
    },

    /// Report unrecognized tokens in a query.
    Check {
        /// The query (read from stdin if not specified).
        query: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Numeric {
    /// At most one fractional part.
    Strict,
    /// Any number of `.digits` groups.
    Compat,
}

impl From<Numeric> for NumericGrammar {
    fn from(numeric: Numeric) -> Self {
        match numeric {
            Numeric::Strict => Self::Strict,
            Numeric::Compat => Self::Compat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One token per line.
    Text,
    /// A JSON array of tokens.
    Json,
}

fn read_query(query: Option<String>) -> anyhow::Result<String> {
    if let Some(query) = query {
        return Ok(query);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read query from stdin")?;
    Ok(buffer)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = LexerConfig::new().numeric(cli.numeric.into());
    debug!(numeric = config.numeric.as_str(), "lexer configured");

    match cli.command {
        Commands::Tokenize {
            query,
            format,
            strict,
        } => {
            let query = read_query(query)?;
            let mut lexer = Lexer::with_config(&query, config);
            let tokens = if strict {
                lexer.tokenize_strict()?
            } else {
                lexer.tokenize()
            };

            match format {
                Format::Text => print!("{}", render::text(&tokens)),
                Format::Json => println!("{}", render::json(&tokens)?),
            }
        }

        Commands::Check { query } => {
            let query = read_query(query)?;
            let unrecognized: Vec<Token> = Lexer::with_config(&query, config)
                .filter(Token::is_unrecognized)
                .collect();

            if unrecognized.is_empty() {
                info!("Query is free of unrecognized tokens.");
                println!("ok");
                return Ok(());
            }

            for token in &unrecognized {
                eprintln!("{}", render::diagnostic(&query, token));
            }
            bail!("{} unrecognized token(s)", unrecognized.len());
        }
    }

    Ok(())
}
