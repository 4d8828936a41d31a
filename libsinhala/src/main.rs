use anyhow::Result;
use clap::{Parser, Subcommand};
use libsinhala::{create_predictor, utils, Predictor, SinhalaConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Sinhala word completion and vowel-mark prediction.
///
/// Results are printed as JSON arrays. Set RUST_LOG=info to see table loading.
#[derive(Parser, Debug)]
#[command(name = "sinhala-predict", version, about)]
struct Cli {
    /// TOML config file (SinhalaConfig)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the word list and vowel tables
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Bincode snapshot file name inside the data directory
    #[arg(long)]
    snapshot: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Complete a word prefix
    Word {
        prefix: String,
    },
    /// Suggest vowel marks for the consonant just typed
    Vowel {
        /// Current word, including the consonant just typed
        prefix: String,
        /// The consonant just typed (defaults to the last character of PREFIX)
        #[arg(long, default_value = "")]
        current: String,
        /// Also print which table answered and the key used
        #[arg(long)]
        explain: bool,
    },
    /// Read typed text line by line and predict for its last word
    Repl,
}

fn load_config(cli: &Cli) -> Result<SinhalaConfig> {
    let mut config = match &cli.config {
        Some(path) => SinhalaConfig::load_toml(path)?,
        None => SinhalaConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(snapshot) = &cli.snapshot {
        config.snapshot = Some(snapshot.clone());
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let predictor = create_predictor(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Word { prefix } => {
            let words = predictor.predict_word(prefix);
            writeln!(out, "{}", serde_json::to_string(&words)?)?;
        }
        Command::Vowel {
            prefix,
            current,
            explain,
        } => {
            if *explain {
                let detail = predictor.predict_vowel_detailed(prefix, current);
                writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
            } else {
                let vowels = predictor.predict_vowel(prefix, current);
                writeln!(out, "{}", serde_json::to_string(&vowels)?)?;
            }
        }
        Command::Repl => run_repl(&predictor, io::stdin().lock(), &mut out)?,
    }
    Ok(())
}

/// One JSON object per input line: word completions and vowel suggestions for
/// the word being typed at the end of the line.
fn run_repl<R: BufRead, W: Write>(predictor: &Predictor, input: R, out: &mut W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let word = utils::last_word(&line);
        let response = serde_json::json!({
            "word": word,
            "words": predictor.predict_word(word),
            "vowels": predictor.predict_vowel(word, ""),
        });
        writeln!(out, "{}", response)?;
        out.flush()?;
    }
    Ok(())
}
