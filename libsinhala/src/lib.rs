//! libsinhala crate root
//!
//! This crate provides the Sinhala diacritic set, Sinhala data-file
//! configuration and factory functions that compose them with the shared
//! `libabugida-core` prediction types.
//!
//! Public API exported here:
//! - `SINHALA_DIACRITICS`, `Sinhala` and `sinhala_diacritics` from this module
//! - `SinhalaConfig` from `config`
//! - `create_predictor`, `create_shared_predictor`, `load_tables` from `engine`

pub mod config;
pub mod engine;

// Re-export the core types callers need alongside the factories.
pub use libabugida_core::{
    last_base_consonant, utils, Config, DiacriticClassifier, DiacriticSet, Lexicon, Predictor,
    SharedPredictor, Tables, VowelPrediction, VowelTable, VowelTier,
};

pub use config::SinhalaConfig;
pub use engine::{create_predictor, create_shared_predictor, load_tables, reload};

/// Sinhala combining vowel signs and the signs that never start a syllable:
/// the dependent vowel signs, al-lakuna (virama), anusvara, visarga and the
/// gayanukitta.
pub static SINHALA_DIACRITICS: phf::Set<char> = phf::phf_set! {
    '\u{0DCF}', // ා aela-pilla
    '\u{0DD0}', // ැ ketti aeda-pilla
    '\u{0DD1}', // ෑ diga aeda-pilla
    '\u{0DD2}', // ි ketti is-pilla
    '\u{0DD3}', // ී diga is-pilla
    '\u{0DD4}', // ු ketti paa-pilla
    '\u{0DD6}', // ූ diga paa-pilla
    '\u{0DD8}', // ෘ gaetta-pilla
    '\u{0DF2}', // ෲ diga gaetta-pilla
    '\u{0DD9}', // ෙ kombuva
    '\u{0DDA}', // ේ diga kombuva
    '\u{0DDC}', // ො kombuva haa aela-pilla
    '\u{0DDD}', // ෝ kombuva haa diga aela-pilla
    '\u{0DDE}', // ෞ kombuva haa gayanukitta
    '\u{0DCA}', // ් al-lakuna
    '\u{0D82}', // ං anusvaraya
    '\u{0D83}', // ඃ visargaya
    '\u{0DDF}', // ෟ gayanukitta
};

/// Zero-sized classifier backed by `SINHALA_DIACRITICS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sinhala;

impl DiacriticClassifier for Sinhala {
    fn is_diacritic(&self, ch: char) -> bool {
        SINHALA_DIACRITICS.contains(&ch)
    }
}

/// The Sinhala diacritic set as a runtime `DiacriticSet`.
pub fn sinhala_diacritics() -> DiacriticSet {
    SINHALA_DIACRITICS.iter().copied().collect()
}
