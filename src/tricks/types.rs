use super::context::ContextBonus;
use crate::error::{SymbolKind, TrickError};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// The grammar symbol naming a trick. Display/FromStr use the raw letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize,
)]
pub enum ActionLetter {
    #[strum(serialize = "L")]
    #[serde(rename = "L")]
    ThreeSixty,
    #[strum(serialize = "H")]
    #[serde(rename = "H")]
    TuckNoHander,
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    CashRoll,
    #[strum(serialize = "S")]
    #[serde(rename = "S")]
    Barspin,
    #[strum(serialize = "T")]
    #[serde(rename = "T")]
    Table,
}

impl ActionLetter {
    pub const fn symbol(self) -> char {
        match self {
            Self::ThreeSixty => 'L',
            Self::TuckNoHander => 'H',
            Self::CashRoll => 'R',
            Self::Barspin => 'S',
            Self::Table => 'T',
        }
    }

    /// Human-readable trick name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ThreeSixty => "360",
            Self::TuckNoHander => "Tuck No-Hander",
            Self::CashRoll => "Cash Roll",
            Self::Barspin => "Barspin",
            Self::Table => "Table",
        }
    }
}

impl TryFrom<char> for ActionLetter {
    type Error = TrickError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'L' => Ok(Self::ThreeSixty),
            'H' => Ok(Self::TuckNoHander),
            'R' => Ok(Self::CashRoll),
            'S' => Ok(Self::Barspin),
            'T' => Ok(Self::Table),
            _ => Err(TrickError::UnrecognizedSymbol {
                kind: SymbolKind::ActionLetter,
                symbol,
            }),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize,
)]
pub enum DifficultyModifier {
    A,
    B,
    C,
    D,
    E,
}

impl DifficultyModifier {
    pub const fn symbol(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Base score multiplier for one repetition.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 1.2,
            Self::C => 1.4,
            Self::D => 1.6,
            Self::E => 1.8,
        }
    }
}

impl TryFrom<char> for DifficultyModifier {
    type Error = TrickError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            _ => Err(TrickError::UnrecognizedSymbol {
                kind: SymbolKind::DifficultyModifier,
                symbol,
            }),
        }
    }
}

/// Looks up the trick name for a raw action letter.
pub fn resolve_action(symbol: char) -> Result<&'static str, TrickError> {
    ActionLetter::try_from(symbol).map(ActionLetter::name)
}

/// Looks up the base multiplier for a raw difficulty letter.
pub fn resolve_multiplier(symbol: char) -> Result<f64, TrickError> {
    DifficultyModifier::try_from(symbol).map(DifficultyModifier::multiplier)
}

/// One decoded trick. Fields are fixed once the engine appends it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    pub(crate) action_letter: ActionLetter,
    pub(crate) action: &'static str,
    pub(crate) repetition_count: u64,
    pub(crate) difficulty_modifier: DifficultyModifier,
    pub(crate) score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bonus: Option<ContextBonus>,
}

impl Trick {
    pub fn action_letter(&self) -> ActionLetter {
        self.action_letter
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn repetition_count(&self) -> u64 {
        self.repetition_count
    }

    pub fn difficulty_modifier(&self) -> DifficultyModifier {
        self.difficulty_modifier
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn bonus(&self) -> Option<ContextBonus> {
        self.bonus
    }
}

/// The ordered result of parsing one signature.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrickSequence {
    pub(crate) tricks: Vec<Trick>,
    pub(crate) difficulty: f64,
}

impl TrickSequence {
    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// Sum of all scores, rounded to 2 decimals.
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.tricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.tricks.iter().map(Trick::score).collect()
    }

    pub fn bonus_count(&self) -> usize {
        self.tricks.iter().filter(|t| t.bonus.is_some()).count()
    }
}
