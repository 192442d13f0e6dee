use super::types::ActionLetter;
use serde::Serialize;
use strum_macros::Display;

/// A score amplifier earned by following one specific trick with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextBonus {
    #[strum(to_string = "Cash Roll after 360")]
    CashRollAfter360,
    #[strum(to_string = "Barspin after Table")]
    BarspinAfterTable,
}

impl ContextBonus {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::CashRollAfter360 => 2.0,
            Self::BarspinAfterTable => 3.0,
        }
    }
}

/// Classifies an adjacent pair. Only the immediately preceding trick counts;
/// the first trick of a sequence has no `previous`.
pub fn analyze_context(previous: Option<ActionLetter>, current: ActionLetter) -> Option<ContextBonus> {
    match (previous?, current) {
        (ActionLetter::ThreeSixty, ActionLetter::CashRoll) => Some(ContextBonus::CashRollAfter360),
        (ActionLetter::Table, ActionLetter::Barspin) => Some(ContextBonus::BarspinAfterTable),
        _ => None,
    }
}

pub fn context_multiplier(previous: Option<ActionLetter>, current: ActionLetter) -> f64 {
    analyze_context(previous, current).map_or(1.0, ContextBonus::multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn first_trick_never_gets_a_bonus() {
        for letter in ActionLetter::iter() {
            assert_eq!(analyze_context(None, letter), None);
            assert_eq!(context_multiplier(None, letter), 1.0);
        }
    }

    #[test]
    fn only_two_pairs_are_amplified() {
        let mut amplified = Vec::new();
        for prev in ActionLetter::iter() {
            for cur in ActionLetter::iter() {
                if let Some(bonus) = analyze_context(Some(prev), cur) {
                    amplified.push((prev, cur, bonus));
                }
            }
        }
        assert_eq!(
            amplified,
            vec![
                (
                    ActionLetter::ThreeSixty,
                    ActionLetter::CashRoll,
                    ContextBonus::CashRollAfter360
                ),
                (
                    ActionLetter::Table,
                    ActionLetter::Barspin,
                    ContextBonus::BarspinAfterTable
                ),
            ]
        );
    }

    #[test]
    fn reversed_pairs_are_plain() {
        assert_eq!(
            context_multiplier(Some(ActionLetter::CashRoll), ActionLetter::ThreeSixty),
            1.0
        );
        assert_eq!(
            context_multiplier(Some(ActionLetter::Barspin), ActionLetter::Table),
            1.0
        );
    }
}
