use anyhow::{bail, Result};
use clap::Parser;
use libsinhala::{Sinhala, Tables};
use sinhala_tools::audit;
use std::path::PathBuf;

/// Compile the word list and vowel tables into one bincode snapshot.
#[derive(Parser, Debug)]
#[command(name = "compile_tables", version, about)]
struct Args {
    /// Word list, one word per line, most frequent first
    #[arg(long)]
    words: PathBuf,

    /// Single-consonant vowel table (JSON)
    #[arg(long)]
    bigrams: PathBuf,

    /// Consonant-pair vowel table (JSON)
    #[arg(long)]
    pairs: PathBuf,

    /// Output snapshot path
    #[arg(long)]
    out: PathBuf,

    /// Apply NFC normalization to every entry before writing
    #[arg(long)]
    nfc: bool,

    /// Refuse to write when the tables contain unreachable or malformed entries
    #[arg(long)]
    strict: bool,

    /// Print the validation report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut tables = Tables::load(&args.words, &args.bigrams, &args.pairs)?;
    if args.nfc {
        tables = tables.normalized()?;
    }

    let report = audit(&tables, &Sinhala);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    if !report.is_clean() {
        if args.strict {
            bail!("tables failed validation, not writing {}", args.out.display());
        }
        tracing::warn!("tables have suspicious entries, writing anyway");
    }

    tables.save_bincode(&args.out)?;
    println!("Wrote snapshot to {}", args.out.display());
    Ok(())
}
