// core/src/shared.rs
//
// Hot-swappable predictor handle. Readers grab an `Arc<Predictor>` and keep
// using it for the whole request; a reload builds a complete replacement
// before swapping it in, so no lookup ever sees half-loaded tables.

use std::sync::{Arc, RwLock};

use crate::engine::Predictor;

/// A shared, atomically replaceable `Predictor`.
#[derive(Debug)]
pub struct SharedPredictor {
    inner: RwLock<Arc<Predictor>>,
}

impl SharedPredictor {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            inner: RwLock::new(Arc::new(predictor)),
        }
    }

    /// The predictor currently being served.
    pub fn current(&self) -> Arc<Predictor> {
        // The guarded value is an immutable Arc, so a poisoned lock still
        // holds a usable predictor.
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a new predictor, returning the previous one.
    pub fn replace(&self, predictor: Predictor) -> Arc<Predictor> {
        let next = Arc::new(predictor);
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, next)
    }

    /// Build a replacement with `build` and swap it in only if it succeeds.
    ///
    /// On error the current predictor keeps serving and the error is returned.
    pub fn reload_with<F>(&self, build: F) -> anyhow::Result<()>
    where
        F: FnOnce() -> anyhow::Result<Predictor>,
    {
        match build() {
            Ok(predictor) => {
                self.replace(predictor);
                tracing::info!("predictor reloaded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("predictor reload failed, keeping current tables: {:#}", e);
                Err(e)
            }
        }
    }

    pub fn predict_word(&self, prefix: &str) -> Vec<String> {
        self.current().predict_word(prefix)
    }

    pub fn predict_vowel(&self, prefix: &str, current: &str) -> Vec<String> {
        self.current().predict_vowel(prefix, current)
    }
}

impl From<Predictor> for SharedPredictor {
    fn from(predictor: Predictor) -> Self {
        Self::new(predictor)
    }
}
