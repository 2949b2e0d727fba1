use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed feature vocabulary a weight table is keyed by.
///
/// Each variant names one positional n-gram around a break candidate between
/// code points `i-1` and `i`: `UW*` are single code points at offsets
/// `-3..=+2`, `BW*` adjacent pairs, `TW*` adjacent triples. The label doubles
/// as the key in the serialized model form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    UW1,
    UW2,
    UW3,
    UW4,
    UW5,
    UW6,
    BW1,
    BW2,
    BW3,
    TW1,
    TW2,
    TW3,
    TW4,
}

/// Error for labels outside the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature key `{0}`")]
pub struct UnknownFeature(pub String);

impl Feature {
    pub const COUNT: usize = 13;

    /// Every feature, in dense-index order.
    pub const ALL: [Feature; Self::COUNT] = [
        Feature::UW1,
        Feature::UW2,
        Feature::UW3,
        Feature::UW4,
        Feature::UW5,
        Feature::UW6,
        Feature::BW1,
        Feature::BW2,
        Feature::BW3,
        Feature::TW1,
        Feature::TW2,
        Feature::TW3,
        Feature::TW4,
    ];

    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        match self {
            Feature::UW1 => "UW1",
            Feature::UW2 => "UW2",
            Feature::UW3 => "UW3",
            Feature::UW4 => "UW4",
            Feature::UW5 => "UW5",
            Feature::UW6 => "UW6",
            Feature::BW1 => "BW1",
            Feature::BW2 => "BW2",
            Feature::BW3 => "BW3",
            Feature::TW1 => "TW1",
            Feature::TW2 => "TW2",
            Feature::TW3 => "TW3",
            Feature::TW4 => "TW4",
        }
    }

    /// Dense index into `ALL`, used by array-backed embedded tables.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of code points in the n-gram this feature looks at.
    #[inline(always)]
    pub const fn ngram_len(self) -> usize {
        match self {
            Feature::UW1
            | Feature::UW2
            | Feature::UW3
            | Feature::UW4
            | Feature::UW5
            | Feature::UW6 => 1,
            Feature::BW1 | Feature::BW2 | Feature::BW3 => 2,
            Feature::TW1 | Feature::TW2 | Feature::TW3 | Feature::TW4 => 3,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UW1" => Ok(Feature::UW1),
            "UW2" => Ok(Feature::UW2),
            "UW3" => Ok(Feature::UW3),
            "UW4" => Ok(Feature::UW4),
            "UW5" => Ok(Feature::UW5),
            "UW6" => Ok(Feature::UW6),
            "BW1" => Ok(Feature::BW1),
            "BW2" => Ok(Feature::BW2),
            "BW3" => Ok(Feature::BW3),
            "TW1" => Ok(Feature::TW1),
            "TW2" => Ok(Feature::TW2),
            "TW3" => Ok(Feature::TW3),
            "TW4" => Ok(Feature::TW4),
            other => Err(UnknownFeature(other.to_string())),
        }
    }
}
