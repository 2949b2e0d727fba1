//! Compile-time-embedded weight tables.
//!
//! A model generator emits one `phf_map!` static per feature plus the total
//! weight as a literal, then ties them together in an `EmbeddedModel` static.
//! Retrieving the total is O(1) instead of a full summation, and the table
//! costs nothing at startup.

use phf::Map;

use crate::feature::Feature;

/// A weight table baked into the binary.
///
/// `maps` is indexed by [`Feature::index`], in [`Feature::ALL`] order.
#[derive(Debug)]
pub struct EmbeddedModel {
    maps: [&'static Map<&'static str, i32>; Feature::COUNT],
    total_weight: i32,
}

impl EmbeddedModel {
    /// Tie together generated per-feature maps and the generated total.
    ///
    /// `const` so generated tables can live in `static`s.
    pub const fn new(
        maps: [&'static Map<&'static str, i32>; Feature::COUNT],
        total_weight: i32,
    ) -> Self {
        Self { maps, total_weight }
    }

    #[inline]
    pub fn score(&self, feature: Feature, ngram: &str) -> i32 {
        self.maps[feature.index()]
            .get(ngram)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub const fn total_weight(&self) -> i32 {
        self.total_weight
    }

    /// Consistency check: the hard-coded total equals the sum of every entry.
    ///
    /// A `false` here means the generator emitted a bad literal; the table
    /// would segment with a skewed bias.
    pub fn verify_total(&self) -> bool {
        let sum: i32 = self
            .maps
            .iter()
            .flat_map(|ngrams| ngrams.values())
            .sum();
        sum == self.total_weight
    }
}
