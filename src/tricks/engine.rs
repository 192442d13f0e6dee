use super::context::analyze_context;
use super::tokenizer::TrickToken;
use super::types::{ActionLetter, DifficultyModifier, Trick, TrickSequence};
use crate::error::TrickError;
use tracing::debug;

/// Resolves one token into a scored trick, given the action of the trick
/// right before it.
pub fn resolve_token(token: &TrickToken, previous: Option<ActionLetter>) -> Result<Trick, TrickError> {
    let action_letter = ActionLetter::try_from(token.action)?;
    let difficulty_modifier = DifficultyModifier::try_from(token.modifier)?;

    let bonus = analyze_context(previous, action_letter);
    let context = bonus.map_or(1.0, |b| b.multiplier());

    // Evaluation order is fixed: count * base, then * context.
    let base_score = token.repetitions as f64 * difficulty_modifier.multiplier();
    let score = base_score * context;

    Ok(Trick {
        action_letter,
        action: action_letter.name(),
        repetition_count: token.repetitions,
        difficulty_modifier,
        score,
        bonus,
    })
}

/// Scores tokens in order, threading the previous action letter through.
/// The first failing token aborts the whole sequence.
pub fn score_tokens(tokens: &[TrickToken]) -> Result<TrickSequence, TrickError> {
    let (tricks, total, _) = tokens.iter().try_fold(
        (Vec::with_capacity(tokens.len()), 0.0_f64, None),
        |(mut tricks, total, previous), token| -> Result<_, TrickError> {
            let trick = resolve_token(token, previous)?;
            debug!(
                "{} x{} [{}] -> {} (bonus: {:?})",
                trick.action, trick.repetition_count, trick.difficulty_modifier, trick.score, trick.bonus
            );

            let total = total + trick.score;
            let previous = Some(trick.action_letter);
            tricks.push(trick);
            Ok((tricks, total, previous))
        },
    )?;

    Ok(TrickSequence {
        tricks,
        difficulty: round_difficulty(total),
    })
}

/// Rounds to 2 decimals, ties to even.
pub fn round_difficulty(total: f64) -> f64 {
    (total * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SymbolKind;

    #[test]
    fn empty_token_list_scores_zero() {
        let seq = score_tokens(&[]).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.difficulty(), 0.0);
    }

    #[test]
    fn bad_action_letter_aborts() {
        let tokens = [TrickToken::new('L', 1, 'A'), TrickToken::new('X', 1, 'A')];
        let err = score_tokens(&tokens).unwrap_err();
        assert_eq!(
            err,
            TrickError::UnrecognizedSymbol {
                kind: SymbolKind::ActionLetter,
                symbol: 'X'
            }
        );
    }

    #[test]
    fn bad_modifier_aborts() {
        let err = resolve_token(&TrickToken::new('R', 2, 'F'), None).unwrap_err();
        assert_eq!(
            err,
            TrickError::UnrecognizedSymbol {
                kind: SymbolKind::DifficultyModifier,
                symbol: 'F'
            }
        );
    }

    #[test]
    fn rounding_happens_once() {
        assert_eq!(round_difficulty(15.799999999999999), 15.8);
        assert_eq!(round_difficulty(22.000000000000004), 22.0);
        assert_eq!(round_difficulty(0.0), 0.0);
    }
}
