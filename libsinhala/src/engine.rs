// libsinhala/src/engine.rs
//
// Factory functions wiring Sinhala data files and the Sinhala diacritic set
// into a core `Predictor`. Loading fails fast: a missing or malformed file is
// an error, never a half-filled predictor.

use anyhow::Result;
use libabugida_core::{Predictor, SharedPredictor, Tables};

use crate::config::SinhalaConfig;
use crate::sinhala_diacritics;

/// Load the three tables described by `config`.
///
/// A configured snapshot is used when it exists; otherwise the word list and
/// the two JSON tables are read from `data_dir`.
pub fn load_tables(config: &SinhalaConfig) -> Result<Tables> {
    if let Some(snapshot) = config.snapshot_path() {
        if snapshot.exists() {
            return Tables::load_bincode(&snapshot);
        }
        tracing::warn!(
            "snapshot {} not found, loading source files",
            snapshot.display()
        );
    }
    Tables::load(
        config.word_list_path(),
        config.bigram_table_path(),
        config.pair_table_path(),
    )
}

/// Create a Sinhala predictor from the data files described by `config`.
pub fn create_predictor(config: &SinhalaConfig) -> Result<Predictor> {
    let tables = load_tables(config)?;
    Predictor::new(tables, sinhala_diacritics(), config.base().clone())
}

/// Create a hot-swappable Sinhala predictor.
pub fn create_shared_predictor(config: &SinhalaConfig) -> Result<SharedPredictor> {
    create_predictor(config).map(SharedPredictor::new)
}

/// Rebuild from `config` and swap in the result. The old tables keep serving
/// if the rebuild fails.
pub fn reload(shared: &SharedPredictor, config: &SinhalaConfig) -> Result<()> {
    shared.reload_with(|| create_predictor(config))
}
