mod prop_tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use crate::{Feature, LoadedModel, Model, Segmenter};

    /// Random weight tables over a handful of features, wide enough to make
    /// both break and no-break boundaries likely.
    fn arb_model() -> impl Strategy<Value = Model> {
        (
            prop::collection::hash_map("\\PC", -100..100i32, 0..12),
            prop::collection::hash_map("\\PC{2}", -100..100i32, 0..12),
            prop::collection::hash_map("\\PC{3}", -100..100i32, 0..12),
        )
            .prop_map(|(unigrams, bigrams, trigrams)| {
                let entries = HashMap::from([
                    (Feature::UW3, unigrams.clone()),
                    (Feature::UW4, unigrams),
                    (Feature::BW2, bigrams),
                    (Feature::TW3, trigrams),
                ]);
                Model::from(LoadedModel::from_entries(entries))
            })
    }

    proptest! {
        #[test]
        fn phrases_reconstruct_input(model in arb_model(), s in "\\PC{0,120}") {
            let segmenter = Segmenter::new(model);
            prop_assert_eq!(segmenter.segment(&s).concat(), s);
        }

        #[test]
        fn phrases_are_non_empty(model in arb_model(), s in "\\PC{0,120}") {
            let segmenter = Segmenter::new(model);
            let phrases = segmenter.segment(&s);
            prop_assert_eq!(phrases.is_empty(), s.is_empty());
            prop_assert!(phrases.iter().all(|phrase| phrase.chars().count() >= 1));
        }

        #[test]
        fn segmentation_is_deterministic(model in arb_model(), s in "\\PC{0,120}") {
            let segmenter = Segmenter::new(model);
            prop_assert_eq!(segmenter.segment(&s), segmenter.segment(&s));
        }

        #[test]
        fn phrase_count_bounded_by_code_points(model in arb_model(), s in "\\PC{0,120}") {
            let segmenter = Segmenter::new(model);
            prop_assert!(segmenter.segment(&s).len() <= s.chars().count());
        }

        #[test]
        fn empty_table_never_breaks(s in "\\PC{1,80}") {
            let segmenter = Segmenter::new(LoadedModel::default());
            prop_assert_eq!(segmenter.segment(&s), vec![s]);
        }
    }
}
