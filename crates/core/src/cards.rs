use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    Wild,
    Skip,
}

/// Identity of one physical card within a deal.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct CardId(pub u32);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    #[serde(default)]
    pub id: CardId,
    #[serde(default)]
    pub color: Option<Color>,
    pub rank: Rank,
}

impl Card {
    pub fn number(color: Color, number: u8) -> Self {
        Self {
            id: CardId::default(),
            color: Some(color),
            rank: Rank::Number(number),
        }
    }

    pub fn wild() -> Self {
        Self {
            id: CardId::default(),
            color: None,
            rank: Rank::Wild,
        }
    }

    pub fn skip() -> Self {
        Self {
            id: CardId::default(),
            color: None,
            rank: Rank::Skip,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = CardId(id);
        self
    }

    pub fn is_wild(&self) -> bool {
        self.rank == Rank::Wild
    }

    pub fn is_skip(&self) -> bool {
        self.rank == Rank::Skip
    }

    pub fn number_value(&self) -> Option<u8> {
        match self.rank {
            Rank::Number(n) => Some(n),
            Rank::Wild | Rank::Skip => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank, self.color) {
            (Rank::Number(n), Some(color)) => write!(f, "{}{}", color.letter(), n),
            (Rank::Number(n), None) => write!(f, "?{}", n),
            (Rank::Wild, _) => f.write_str("W"),
            (Rank::Skip, _) => f.write_str("S"),
        }
    }
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
