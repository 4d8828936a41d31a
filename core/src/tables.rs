//! Loading the three prediction tables.
//!
//! `Tables` bundles the lexicon and both vowel tables. It is built once, from
//! the source files (word list + two JSON maps) or from a single bincode
//! snapshot, and is then handed to `Predictor::new` by value. Any missing or
//! malformed file fails the whole load; there are no partial tables.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::lexicon::Lexicon;
use crate::utils;
use crate::vowel::VowelTable;

/// Bumped whenever the snapshot layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Lexicon + bigram table + pair table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    pub lexicon: Lexicon,
    pub bigrams: VowelTable,
    pub pairs: VowelTable,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    tables: Tables,
}

impl Tables {
    pub fn new(lexicon: Lexicon, bigrams: VowelTable, pairs: VowelTable) -> Self {
        Self {
            lexicon,
            bigrams,
            pairs,
        }
    }

    /// Load from the source files.
    ///
    /// - words: one word per line, most frequent first
    /// - bigrams: JSON object, consonant -> ordered suggestions
    /// - pairs: JSON object, previous + current consonant -> ordered suggestions
    pub fn load<W, B, P>(words: W, bigrams: B, pairs: P) -> Result<Self>
    where
        W: AsRef<Path>,
        B: AsRef<Path>,
        P: AsRef<Path>,
    {
        let lexicon = Lexicon::load_text(words.as_ref())?;
        let bigrams = VowelTable::load_json(bigrams.as_ref())?;
        let pairs = VowelTable::load_json(pairs.as_ref())?;
        tracing::info!(
            words = lexicon.len(),
            bigram_keys = bigrams.len(),
            pair_keys = pairs.len(),
            "loaded prediction tables from {}",
            words.as_ref().parent().unwrap_or(Path::new(".")).display()
        );
        Ok(Self::new(lexicon, bigrams, pairs))
    }

    /// Save all tables to one bincode snapshot.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("create snapshot {}", path.display()))?;
        let writer = BufWriter::new(file);
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            tables: self.clone(),
        };
        bincode::serialize_into(writer, &snapshot)
            .with_context(|| format!("write snapshot {}", path.display()))?;
        Ok(())
    }

    /// Load tables from a snapshot produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("open snapshot {}", path.display()))?;
        let reader = BufReader::new(file);
        let snapshot: Snapshot = bincode::deserialize_from(reader)
            .with_context(|| format!("decode snapshot {}", path.display()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            bail!(
                "snapshot {} has version {}, expected {}",
                path.display(),
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }
        let tables = snapshot.tables;
        tracing::info!(
            words = tables.lexicon.len(),
            bigram_keys = tables.bigrams.len(),
            pair_keys = tables.pairs.len(),
            "loaded prediction tables from snapshot {}",
            path.display()
        );
        Ok(tables)
    }

    /// NFC-normalize every word, key and suggestion.
    ///
    /// Fails if two keys of one table share an NFC form (for example a
    /// precomposed vowel sign next to its decomposed spelling).
    pub fn normalized(self) -> Result<Self> {
        Ok(Self {
            lexicon: self.lexicon.map_words(utils::nfc),
            bigrams: self
                .bigrams
                .map_strings(utils::nfc)
                .context("normalize bigram table")?,
            pairs: self
                .pairs
                .map_strings(utils::nfc)
                .context("normalize pair table")?,
        })
    }
}
