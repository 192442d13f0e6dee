use bike_tricks::error::TrickError;
use bike_tricks::tricks::tokenizer::{tokenize, TrickToken};
use rstest::rstest;

#[test]
fn test_tokens_in_signature_order() {
    let tokens = tokenize("L4B-H2C-R3A-S1D-T2E").unwrap();
    let actions: String = tokens.iter().map(|t| t.action).collect();
    assert_eq!(actions, "LHRST");
    assert_eq!(tokens[4], TrickToken::new('T', 2, 'E'));
}

#[rstest]
#[case("L4B_R3A", 2)]
#[case("L4B R3A", 2)]
#[case("L4BR3A", 2)]
#[case("xxL4Byy", 1)]
#[case("L4", 0)]
#[case("4B", 0)]
#[case("LB", 0)]
#[case("L4b", 0)]
fn test_match_counts(#[case] signature: &str, #[case] expected: usize) {
    assert_eq!(tokenize(signature).unwrap().len(), expected);
}

#[test]
fn test_failed_candidate_does_not_swallow_next_token() {
    // "L12" has no modifier, scanning resumes and finds "R3A".
    let tokens = tokenize("L12-R3A").unwrap();
    assert_eq!(tokens, vec![TrickToken::new('R', 3, 'A')]);
}

#[test]
fn test_matches_do_not_overlap() {
    // After "L1A" is consumed, the trailing "1B" has no action letter.
    let tokens = tokenize("L1A1B").unwrap();
    assert_eq!(tokens, vec![TrickToken::new('L', 1, 'A')]);
}

#[test]
fn test_non_ascii_digits_do_not_match() {
    assert!(tokenize("L٤B").unwrap().is_empty());
}

#[test]
fn test_large_counts_kept_verbatim() {
    let tokens = tokenize("H18446744073709551615A").unwrap();
    assert_eq!(tokens[0].repetitions, u64::MAX);
}

#[test]
fn test_count_one_past_u64_max_is_rejected() {
    let err = tokenize("L18446744073709551616A").unwrap_err();
    assert_eq!(
        err,
        TrickError::RepetitionOutOfRange("18446744073709551616".to_string())
    );
}
