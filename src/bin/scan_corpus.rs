use clap::Parser;
use php_lexer::{LexError, Lexer, LexerConfig, SourceBuffer};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "scan_corpus")]
#[command(about = "Lex every .php file under a directory", long_about = None)]
struct Cli {
    #[arg(name = "DIR")]
    dir: PathBuf,

    /// Reproduce the reference scanner's behaviour
    #[arg(long)]
    legacy: bool,

    /// Let unterminated strings and comments run to end of input
    #[arg(long)]
    lenient: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    php_lexer::logging::init(cli.verbose);

    let mut config = if cli.legacy { LexerConfig::legacy() } else { LexerConfig::default() };
    if cli.lenient {
        config = config.lenient();
    }

    println!("Scanning directory: {}", cli.dir.display());
    let files = find_php_files(&cli.dir);
    println!("Found {} PHP files", files.len());

    let ok = AtomicUsize::new(0);
    let total_tokens = AtomicUsize::new(0);
    let start = Instant::now();

    let mut failures: Vec<(PathBuf, LexError)> = files
        .par_iter()
        .filter_map(|path| match lex_file(path, config) {
            Ok(count) => {
                ok.fetch_add(1, Ordering::Relaxed);
                total_tokens.fetch_add(count, Ordering::Relaxed);
                None
            }
            Err(error) => Some((path.clone(), error)),
        })
        .collect();
    failures.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, error) in &failures {
        println!("FAIL {}: {}", path.display(), error);
    }

    println!("Lexed OK: {}", ok.load(Ordering::Relaxed));
    println!("Failed: {}", failures.len());
    println!("Tokens: {}", total_tokens.load(Ordering::Relaxed));
    println!("Elapsed: {:.2?}", start.elapsed());

    if !failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn lex_file(path: &Path, config: LexerConfig) -> Result<usize, LexError> {
    let source = SourceBuffer::from_path(path)?;
    let tokens = Lexer::with_config(&source, config).scan_all()?;
    Ok(tokens.len())
}

fn find_php_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "php"))
        .collect()
}
