//! The segmentation engine.
//!
//! Decides independently at every code-point boundary whether a phrase break
//! belongs there, by summing doubled weight-table contributions for up to 13
//! positional n-gram features against a fixed bias. No dictionary, no
//! grammar; everything the engine knows is in the table.

use smallvec::SmallVec;

use crate::feature::Feature;
use crate::model::Model;

/// Decoded code points of one input. Sized so typical sentences stay on the
/// stack.
type CodePoints = SmallVec<[char; 64]>;

/// Splits text into phrase chunks using a pretrained weight table.
///
/// All state is immutable after construction, so one `Segmenter` can serve
/// concurrent callers without locking.
///
/// ```
/// use std::collections::HashMap;
/// use kugiri::{Feature, LoadedModel, Segmenter};
///
/// let entries = HashMap::from([(Feature::UW4, HashMap::from([("a".to_string(), 100)]))]);
/// let segmenter = Segmenter::new(LoadedModel::from_entries(entries));
/// assert_eq!(segmenter.segment("xyzabc"), vec!["xyz", "abc"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    model: Model,
}

impl Segmenter {
    pub fn new(model: impl Into<Model>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Segment `text` into phrases.
    ///
    /// The returned phrases concatenate back to `text` exactly; every phrase
    /// holds at least one code point, and only the empty input yields an
    /// empty list. A boundary breaks iff its score is strictly positive, so
    /// a zero-weight table produces a single whole-input phrase.
    pub fn segment(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let chars: CodePoints = text.chars().collect();
        let mut phrases = vec![chars[0].to_string()];

        // Fixed per-table bias; every boundary starts this far below zero.
        let bias = self.model.total_weight();
        let mut ngram = String::with_capacity(12);

        for i in 1..chars.len() {
            if self.boundary_score(&chars, i, bias, &mut ngram) > 0 {
                phrases.push(String::new());
            }
            phrases
                .last_mut()
                .expect("seeded with the first code point – this is a bug")
                .push(chars[i]);
        }

        phrases
    }

    /// Score the boundary before `chars[i]`.
    ///
    /// Each feature spans fixed code-point offsets around the boundary and is
    /// skipped when its span falls outside the input. Matched contributions
    /// count double; the table's total weight is subtracted once up front.
    fn boundary_score(&self, chars: &[char], i: usize, bias: i32, ngram: &mut String) -> i32 {
        let len = chars.len();
        let mut score = -bias;

        if i > 2 {
            score += self.feature_score(Feature::UW1, chars, i - 3, 1, ngram);
        }
        if i > 1 {
            score += self.feature_score(Feature::UW2, chars, i - 2, 1, ngram);
        }
        score += self.feature_score(Feature::UW3, chars, i - 1, 1, ngram);
        score += self.feature_score(Feature::UW4, chars, i, 1, ngram);
        if i + 1 < len {
            score += self.feature_score(Feature::UW5, chars, i + 1, 1, ngram);
        }
        if i + 2 < len {
            score += self.feature_score(Feature::UW6, chars, i + 2, 1, ngram);
        }
        if i > 1 {
            score += self.feature_score(Feature::BW1, chars, i - 2, 2, ngram);
        }
        score += self.feature_score(Feature::BW2, chars, i - 1, 2, ngram);
        if i + 1 < len {
            score += self.feature_score(Feature::BW3, chars, i, 2, ngram);
        }
        if i > 2 {
            score += self.feature_score(Feature::TW1, chars, i - 3, 3, ngram);
        }
        if i > 1 {
            score += self.feature_score(Feature::TW2, chars, i - 2, 3, ngram);
        }
        if i + 1 < len {
            score += self.feature_score(Feature::TW3, chars, i - 1, 3, ngram);
        }
        if i + 2 < len {
            score += self.feature_score(Feature::TW4, chars, i, 3, ngram);
        }

        score
    }

    #[inline]
    fn feature_score(
        &self,
        feature: Feature,
        chars: &[char],
        start: usize,
        n: usize,
        buf: &mut String,
    ) -> i32 {
        buf.clear();
        buf.extend(&chars[start..start + n]);
        2 * self.model.score(feature, buf)
    }
}
