use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use libsinhala::{load_tables, SinhalaConfig, Tables};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Table {
    /// Words completing KEY, in list order
    Word,
    /// Single-consonant vowel table
    Bigram,
    /// Consonant-pair vowel table
    Pair,
}

/// Print one entry of the prediction tables.
#[derive(Parser, Debug)]
#[command(name = "show_table_entry", about)]
struct Args {
    /// Read a compiled snapshot instead of the source files
    #[arg(long, conflicts_with = "data_dir")]
    snapshot: Option<PathBuf>,

    /// Directory holding the source files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Table::Word)]
    table: Table,

    /// Word prefix, consonant, or consonant pair
    key: String,

    /// Maximum words listed for `--table word`
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

fn open(args: &Args) -> Result<Tables> {
    match (&args.snapshot, &args.data_dir) {
        (Some(path), _) => Tables::load_bincode(path),
        (None, Some(dir)) => load_tables(&SinhalaConfig::with_data_dir(dir)),
        (None, None) => load_tables(&SinhalaConfig::default()),
    }
}

fn show(tables: &Tables, table: Table, key: &str, limit: usize) -> Result<Vec<String>> {
    let lines = match table {
        Table::Word => tables
            .lexicon
            .scan_prefix(key, limit)
            .into_iter()
            .map(str::to_string)
            .collect(),
        Table::Bigram | Table::Pair => {
            let t = if table == Table::Bigram {
                &tables.bigrams
            } else {
                &tables.pairs
            };
            if !t.contains_key(key) {
                bail!("key '{}' not found in {:?} table", key, table);
            }
            t.suggestions(key).to_vec()
        }
    };
    Ok(lines)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let tables = open(&args)?;
    let entries = show(&tables, args.table, &args.key, args.limit)?;
    println!("Found {} entries for '{}':", entries.len(), args.key);
    for (i, entry) in entries.iter().enumerate() {
        println!("  {}. {}", i + 1, entry);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libsinhala::{Lexicon, VowelTable};

    fn tables() -> Tables {
        let mut bigrams = VowelTable::new();
        bigrams.insert("ක", ["කා", "කි"]);
        let mut pairs = VowelTable::new();
        pairs.insert("කත", ["තා"]);
        Tables::new(Lexicon::from_words(["කතාව", "කතා", "ගම"]), bigrams, pairs)
    }

    #[test]
    fn word_entries_follow_list_order() {
        let got = show(&tables(), Table::Word, "කත", 20).unwrap();
        assert_eq!(got, vec!["කතාව", "කතා"]);
        assert_eq!(show(&tables(), Table::Word, "ක", 1).unwrap().len(), 1);
    }

    #[test]
    fn vowel_entries() {
        assert_eq!(show(&tables(), Table::Bigram, "ක", 20).unwrap(), vec!["කා", "කි"]);
        assert_eq!(show(&tables(), Table::Pair, "කත", 20).unwrap(), vec!["තා"]);
        assert!(show(&tables(), Table::Pair, "ගම", 20).is_err());
    }

    #[test]
    fn snapshot_and_data_dir_conflict() {
        let res = Args::try_parse_from([
            "show_table_entry",
            "--snapshot",
            "a",
            "--data-dir",
            "b",
            "x",
        ]);
        assert!(res.is_err());
    }
}
