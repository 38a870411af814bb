//! Property-based tests for the word and line conversion rules
//!
//! These check the structural laws of the conversion over generated tokens
//! and lines rather than fixed examples.

use proptest::prelude::*;
use snakeshift::{convert_line, convert_word};

/// Strategy: a non-empty ASCII alphanumeric token, as produced by splitting
/// a line on whitespace.
fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,24}"
}

fn line_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..8)
}

proptest! {
    #[test]
    fn output_length_is_input_plus_boundaries(token in token_strategy()) {
        let converted = convert_word(&token);
        let boundaries = token
            .chars()
            .skip(1)
            .filter(|c| c.is_ascii_uppercase())
            .count();

        prop_assert_eq!(converted.len(), token.len() + boundaries);
    }

    #[test]
    fn output_is_uppercase_and_underscores(token in token_strategy()) {
        let converted = convert_word(&token);

        prop_assert!(converted
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
    }

    #[test]
    fn non_letters_keep_their_relative_order(token in token_strategy()) {
        let digits_in: Vec<char> = token.chars().filter(|c| c.is_ascii_digit()).collect();
        let digits_out: Vec<char> = convert_word(&token)
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        prop_assert_eq!(digits_in, digits_out);
    }

    #[test]
    fn line_token_count_is_preserved(tokens in line_strategy()) {
        let line = tokens.join(" ");
        let converted = convert_line(&line);

        prop_assert_eq!(converted.split_whitespace().count(), tokens.len());
    }

    #[test]
    fn conversion_never_panics_on_arbitrary_tokens(token in "\\PC{0,32}") {
        // Total over strings, including punctuation and non-ASCII input.
        let _ = convert_word(&token);
    }
}
