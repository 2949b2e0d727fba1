pub mod embedded;
pub mod loaded;

use thiserror::Error;

use crate::feature::{Feature, UnknownFeature};
use crate::model::embedded::EmbeddedModel;
use crate::model::loaded::LoadedModel;

/// Errors raised while constructing a weight table.
///
/// Lookup itself is infallible (absent entries score 0); everything that can
/// go wrong happens at load time, and a broken source rejects construction
/// rather than degrading into an empty table with a zero bias.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownFeature(#[from] UnknownFeature),

    #[error("feature `{feature}` maps n-gram `{ngram}` of {got} code points, expected {want}")]
    NgramLength {
        feature: Feature,
        ngram: String,
        got: usize,
        want: usize,
    },
}

/// An immutable weight table, selected at construction time from one of two
/// interchangeable storage strategies.
///
/// Both answer the same two questions: the contribution of one
/// `(feature, n-gram)` pair, and the fixed sum of every stored contribution.
/// Equal underlying data gives identical answers regardless of strategy.
#[derive(Debug, Clone)]
pub enum Model {
    /// Parsed at runtime from serialized data.
    Loaded(LoadedModel),
    /// Baked into the binary by a model generator.
    Embedded(&'static EmbeddedModel),
}

impl Model {
    /// Wrap a generated constant table.
    ///
    /// The table's hard-coded total must agree with its entries; a mismatch
    /// is a bug in the generator, not a runtime condition.
    pub fn embedded(table: &'static EmbeddedModel) -> Self {
        debug_assert!(
            table.verify_total(),
            "embedded model total_weight disagrees with its entries – broken generator output"
        );
        Model::Embedded(table)
    }

    /// Contribution of `ngram` under `feature`; 0 when unmapped.
    #[inline]
    pub fn score(&self, feature: Feature, ngram: &str) -> i32 {
        match self {
            Model::Loaded(m) => m.score(feature, ngram),
            Model::Embedded(m) => m.score(feature, ngram),
        }
    }

    /// Sum of every stored weight, fixed at construction.
    #[inline]
    pub fn total_weight(&self) -> i32 {
        match self {
            Model::Loaded(m) => m.total_weight(),
            Model::Embedded(m) => m.total_weight(),
        }
    }
}

impl From<LoadedModel> for Model {
    fn from(model: LoadedModel) -> Self {
        Model::Loaded(model)
    }
}

impl From<&'static EmbeddedModel> for Model {
    fn from(table: &'static EmbeddedModel) -> Self {
        Model::embedded(table)
    }
}
