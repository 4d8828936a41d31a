use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sinhala-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libabugida_core::Config` (flattened via serde)
/// - Where the three data files live and what they are called
/// - An optional bincode snapshot used instead of the source files
///
/// # Example
///
/// ```rust
/// use libsinhala::SinhalaConfig;
///
/// let config = SinhalaConfig::from_toml_str("data_dir = \"/srv/sinhala\"\nmax_fallback_suggestions = 6\n").unwrap();
/// assert_eq!(config.base.max_fallback_suggestions, 6);
/// assert!(config.word_list_path().ends_with("word_frequency_clean.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SinhalaConfig {
    /// Base configuration fields (limits, normalization, extra marks)
    #[serde(flatten)]
    pub base: libabugida_core::Config,

    /// Directory holding the data files below
    pub data_dir: PathBuf,

    /// Word list, one word per line, most frequent first
    pub word_list: String,
    /// JSON: consonant -> vowel suggestions
    pub bigram_table: String,
    /// JSON: previous consonant + current consonant -> vowel suggestions
    pub pair_table: String,

    /// Bincode snapshot inside `data_dir`; preferred over the files above when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
}

impl Default for SinhalaConfig {
    fn default() -> Self {
        Self {
            base: libabugida_core::Config::default(),
            data_dir: PathBuf::from("data/sinhala"),
            word_list: "word_frequency_clean.txt".to_string(),
            bigram_table: "vowel_bigrams.json".to_string(),
            pair_table: "vowel_combination_map_Most_Used.json".to_string(),
            snapshot: None,
        }
    }
}

impl SinhalaConfig {
    /// Default config rooted at `data_dir`.
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn word_list_path(&self) -> PathBuf {
        self.data_dir.join(&self.word_list)
    }

    pub fn bigram_table_path(&self) -> PathBuf {
        self.data_dir.join(&self.bigram_table)
    }

    pub fn pair_table_path(&self) -> PathBuf {
        self.data_dir.join(&self.pair_table)
    }

    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.snapshot.as_ref().map(|s| self.data_dir.join(s))
    }

    /// Convert this config into the base config for use with `Predictor::new()`
    pub fn into_base(self) -> libabugida_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libabugida_core::Config {
        &self.base
    }
}
