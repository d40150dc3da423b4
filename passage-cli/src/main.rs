use anyhow::Result;
use clap::Parser;
use passage_cli::{answer, load_files};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "passage")]
#[command(about = "Answer a query with the most relevant passage from a text corpus", long_about = None)]
struct Args {
    /// Corpus directory of text files
    corpus: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let files = load_files(&args.corpus)?;

    print!("Query: ");
    io::stdout().flush()?;
    let mut query = String::new();
    io::stdin().lock().read_line(&mut query)?;

    for sentence in answer(&files, query.trim()) {
        println!("{sentence}");
    }
    Ok(())
}
