//! Runtime-parsed weight tables.
//!
//! The serialized form is the nested `{"UW1": {"あ": 3, ...}, ...}` mapping
//! produced by the model trainer. Parsing is the fail-fast edge of the crate:
//! bad JSON, unknown feature keys, and n-grams of the wrong arity all reject
//! construction with a [`ModelError`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::feature::Feature;
use crate::model::ModelError;

/// A weight table parsed at runtime.
///
/// The total weight is summed exactly once, here, and carried as part of the
/// immutable value; lookups and `total_weight` are pure reads thereafter, so
/// a `LoadedModel` can be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct LoadedModel {
    entries: HashMap<Feature, HashMap<String, i32>>,
    total_weight: i32,
}

impl LoadedModel {
    /// Build from already-decoded entries.
    pub fn from_entries(entries: HashMap<Feature, HashMap<String, i32>>) -> Self {
        let total_weight = entries.values().flat_map(HashMap::values).sum();
        Self {
            entries,
            total_weight,
        }
    }

    /// Parse the serialized nested-mapping form.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let raw: HashMap<String, HashMap<String, i32>> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse from any reader yielding the serialized form.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let raw: HashMap<String, HashMap<String, i32>> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Load a model file by path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    fn from_raw(raw: HashMap<String, HashMap<String, i32>>) -> Result<Self, ModelError> {
        let mut entries: HashMap<Feature, HashMap<String, i32>> =
            HashMap::with_capacity(raw.len());
        for (key, ngrams) in raw {
            let feature: Feature = key.parse()?;
            let want = feature.ngram_len();
            for ngram in ngrams.keys() {
                let got = ngram.chars().count();
                if got != want {
                    return Err(ModelError::NgramLength {
                        feature,
                        ngram: ngram.clone(),
                        got,
                        want,
                    });
                }
            }
            entries.insert(feature, ngrams);
        }
        Ok(Self::from_entries(entries))
    }

    #[inline]
    pub fn score(&self, feature: Feature, ngram: &str) -> i32 {
        self.entries
            .get(&feature)
            .and_then(|ngrams| ngrams.get(ngram))
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn total_weight(&self) -> i32 {
        self.total_weight
    }
}
