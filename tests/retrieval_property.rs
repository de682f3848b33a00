//! Property tests for the retrieval primitives.

use proptest::prelude::*;

use brickrag::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    // Mixed-case words, digits, and the punctuation OCR tends to emit.
    proptest::string::string_regex("[A-Za-z0-9 ₹.%/,:-]{0,120}").expect("valid regex")
}

proptest! {
    #[test]
    fn tokens_are_lowercase_and_non_empty(query in text_strategy()) {
        let tokenizer = QueryTokenizer::with_defaults();
        for token in tokenizer.tokenize(&query) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.clone(), token.to_lowercase());
        }
    }

    #[test]
    fn tokenization_is_idempotent_on_its_own_output(query in text_strategy()) {
        let tokenizer = QueryTokenizer::with_defaults();
        let once = tokenizer.tokenize(&query);
        let again = tokenizer.tokenize(&once.join(" "));
        prop_assert_eq!(once, again);
    }

    #[test]
    fn scores_are_finite_and_non_negative(
        doc in text_strategy(),
        query in text_strategy(),
    ) {
        let tokenizer = QueryTokenizer::with_defaults();
        let scorer = RelevanceScorer::with_defaults();
        let tokens = tokenizer.tokenize(&query);
        let score = scorer.score(&Candidate::new(doc), &tokens);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    #[test]
    fn selection_is_bounded_and_repeat_free(
        texts in proptest::collection::vec(text_strategy(), 0..12),
        k in 0usize..8,
    ) {
        let retriever = Retriever::with_defaults();
        let candidates: Vec<Candidate> =
            texts.iter().map(Candidate::new).collect();
        let n = candidates.len();

        let result = retriever.rank("payment plan price bhk", candidates, k);

        prop_assert!(result.len() <= k);
        prop_assert!(result.len() <= n);
        prop_assert_eq!(result.documents.len(), result.metadata.len());
        // Every selected document must come from the input.
        for doc in &result.documents {
            prop_assert!(texts.iter().any(|t| t == doc));
        }
    }

    #[test]
    fn full_k_is_selected_when_enough_candidates_exist(
        texts in proptest::collection::vec(text_strategy(), 5..10),
    ) {
        let retriever = Retriever::with_defaults();
        let candidates: Vec<Candidate> = texts.iter().map(Candidate::new).collect();
        let result = retriever.rank("payment plan price bhk", candidates, 4);
        prop_assert_eq!(result.len(), 4);
    }
}
