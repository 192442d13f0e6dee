pub mod context;
pub mod engine;
pub mod tokenizer;
pub mod types;

pub use self::context::ContextBonus;
pub use self::tokenizer::TrickToken;
pub use self::types::{
    resolve_action, resolve_multiplier, ActionLetter, DifficultyModifier, Trick, TrickSequence,
};

use crate::error::TrickError;
use std::str::FromStr;

impl TrickSequence {
    /// Decodes a signature such as `"L4B-R3A-H2C"` into scored tricks.
    pub fn parse(signature: &str) -> Result<Self, TrickError> {
        let tokens = tokenizer::tokenize(signature)?;
        engine::score_tokens(&tokens)
    }
}

impl FromStr for TrickSequence {
    type Err = TrickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
