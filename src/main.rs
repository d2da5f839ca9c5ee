use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use php_lexer::{Lexer, LexerConfig, SourceBuffer};

#[derive(Parser)]
#[command(name = "php-lexer")]
#[command(about = "Print the tokens of a PHP source file", long_about = None)]
struct Cli {
    /// Source file to tokenize
    #[arg(name = "FILE")]
    file: PathBuf,

    /// Print the tokens as JSON
    #[arg(long)]
    json: bool,

    /// Append line:column+length to every token
    #[arg(long)]
    positions: bool,

    /// Reproduce the reference scanner's positions and keyword matching
    #[arg(long, conflicts_with = "config")]
    legacy: bool,

    /// Let unterminated strings and comments run to end of input
    #[arg(long)]
    lenient: bool,

    /// Read the lexer configuration from a JSON file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn lexer_config(&self) -> anyhow::Result<LexerConfig> {
        let mut config = if self.legacy {
            LexerConfig::legacy()
        } else if let Some(path) = &self.config {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            LexerConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        } else {
            LexerConfig::default()
        };
        if self.lenient {
            config = config.lenient();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    php_lexer::logging::init(cli.verbose);

    let config = cli.lexer_config()?;
    let source = SourceBuffer::from_path(&cli.file)?;
    let tokens = Lexer::with_config(&source, config)
        .scan_all()
        .with_context(|| format!("lexing {}", cli.file.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    for token in &tokens {
        if cli.positions {
            println!("{} @ {}", token, token.position);
        } else {
            println!("{}", token);
        }
    }

    Ok(())
}
