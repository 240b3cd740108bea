use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;

use wordset::checker::Checker;
use wordset::config::{expand_tilde, Config};
use wordset::dictionary::WordSet;
use wordset::lexer::WordLexer;

/// Check text files against a word list.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Text files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Word list with one word per line, overrides the config
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("wordset: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    let dictionary_path = args
        .dictionary
        .clone()
        .unwrap_or_else(|| config.dictionary.clone());
    let dictionary_path = expand_tilde(&dictionary_path).unwrap_or(dictionary_path);

    let mut dictionary = WordSet::with_limits(config.bucket_count, config.max_word_length);
    let started = Instant::now();
    dictionary.load_path(&dictionary_path)?;
    info!(
        "loaded {} words from {} in {:?}",
        dictionary.size(),
        dictionary_path.display(),
        started.elapsed()
    );

    let checker = Checker::new(&config.ignore);
    let mut unknown = 0;
    let mut checked = 0;
    for file in &args.files {
        let text = fs::read_to_string(file)?;
        let report = checker.run(&dictionary, WordLexer::new(&text));
        for token in &report.unknown {
            println!(
                "{}:{}:{}: Unknown word \"{}\"",
                file.display(),
                token.line,
                token.column,
                token.text
            );
        }
        unknown += report.unknown.len();
        checked += report.words_checked;
    }

    println!("words in dictionary: {}", dictionary.size());
    println!("words checked:       {checked}");
    println!("unknown words:       {unknown}");
    dictionary.unload()?;

    Ok(unknown)
}
