use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboKind {
    Set,
    Run,
}

/// A laid-down group. `anchor` is the shared rank of a set; runs leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    pub kind: ComboKind,
    pub cards: Vec<Card>,
    #[serde(default)]
    pub anchor: Option<u8>,
}

impl Combo {
    pub fn set(cards: Vec<Card>, anchor: u8) -> Self {
        Self {
            kind: ComboKind::Set,
            cards,
            anchor: Some(anchor),
        }
    }

    pub fn run(cards: Vec<Card>) -> Self {
        Self {
            kind: ComboKind::Run,
            cards,
            anchor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn accepts(&self, card: &Card) -> bool {
        match self.kind {
            ComboKind::Set => {
                let Some(anchor) = set_number(self) else {
                    return false;
                };
                card.is_wild() || card.number_value() == Some(anchor)
            }
            ComboKind::Run => {
                if card.is_wild() {
                    return true;
                }
                let (Some(value), Some((low, high))) = (card.number_value(), run_bounds(self))
                else {
                    return false;
                };
                value + 1 == low || value == high + 1
            }
        }
    }

    /// Appends without validation; pair with `accepts`.
    pub fn extend(&mut self, card: Card) {
        self.cards.push(card);
        if self.kind == ComboKind::Run {
            sort_run_cards(&mut self.cards);
        }
    }

    /// Structural check: same rank (or wild) for sets, contiguous ranks with
    /// wild fill for runs. Groups without a numbered card are never valid.
    pub fn is_valid(&self) -> bool {
        if self.cards.iter().any(Card::is_skip) {
            return false;
        }
        match self.kind {
            ComboKind::Set => match set_number(self) {
                Some(anchor) => self.anchor.map_or(true, |a| a == anchor),
                None => false,
            },
            ComboKind::Run => {
                let mut seen = HashSet::new();
                let numbers: Vec<u8> = self.cards.iter().filter_map(Card::number_value).collect();
                if numbers.is_empty() || !numbers.iter().all(|n| seen.insert(*n)) {
                    return false;
                }
                let wilds = self.cards.iter().filter(|c| c.is_wild()).count();
                let low = numbers.iter().copied().min().unwrap_or(0) as usize;
                let high = numbers.iter().copied().max().unwrap_or(0) as usize;
                let gaps = high - low + 1 - numbers.len();
                gaps <= wilds
            }
        }
    }
}

/// Common rank of the numbered cards in a set; `None` when absent or mixed.
pub fn set_number(combo: &Combo) -> Option<u8> {
    let mut numbers = combo.cards.iter().filter_map(Card::number_value);
    let first = numbers.next()?;
    if numbers.all(|n| n == first) {
        Some(first)
    } else {
        None
    }
}

pub fn run_bounds(combo: &Combo) -> Option<(u8, u8)> {
    let numbers = combo.cards.iter().filter_map(Card::number_value);
    numbers.fold(None, |acc, n| match acc {
        None => Some((n, n)),
        Some((low, high)) => Some((low.min(n), high.max(n))),
    })
}

/// Ascending by rank with wilds trailing. Display order only.
pub fn sort_run_cards(cards: &mut [Card]) {
    cards.sort_by_key(|card| match card.number_value() {
        Some(n) => (0u8, n),
        None => (1u8, 0),
    });
}
