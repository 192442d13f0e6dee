use crate::error::TrickError;
use regex::Regex;
use std::sync::OnceLock;

/// A raw `(action, repetitions, modifier)` triple as read from a signature.
/// Letters are kept as `char` so tokens can be built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickToken {
    pub action: char,
    pub repetitions: u64,
    pub modifier: char,
}

impl TrickToken {
    pub fn new(action: char, repetitions: u64, modifier: char) -> Self {
        Self {
            action,
            repetitions,
            modifier,
        }
    }
}

fn trick_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([LHRST])([0-9]+)([A-E])").expect("trick regex must compile"))
}

/// Extracts every token in the signature, left to right.
///
/// Anything between tokens is skipped, so separators are optional and a
/// signature without a single match yields an empty list.
pub fn tokenize(signature: &str) -> Result<Vec<TrickToken>, TrickError> {
    trick_pattern()
        .captures_iter(signature)
        .map(|caps| -> Result<TrickToken, TrickError> {
            // Groups 1 and 3 are single ASCII letters by construction.
            let action = char::from(caps[1].as_bytes()[0]);
            let modifier = char::from(caps[3].as_bytes()[0]);
            let digits = &caps[2];
            let repetitions = digits
                .parse::<u64>()
                .map_err(|_| TrickError::RepetitionOutOfRange(digits.to_string()))?;

            Ok(TrickToken::new(action, repetitions, modifier))
        })
        .collect()
}
