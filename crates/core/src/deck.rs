use crate::{Card, Color, DeckRule, RngState};

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// Builds the unshuffled deck, numbering cards from 1 in build order.
    pub fn phase_deck(rule: &DeckRule) -> Self {
        let mut draw = Vec::with_capacity(rule.total_cards());
        for color in Color::ALL {
            for number in 1..=rule.max_number {
                for _ in 0..rule.copies {
                    draw.push(Card::number(color, number));
                }
            }
        }
        for _ in 0..rule.wilds {
            draw.push(Card::wild());
        }
        for _ in 0..rule.skips {
            draw.push(Card::skip());
        }
        for (idx, card) in draw.iter_mut().enumerate() {
            card.id = crate::CardId(idx as u32 + 1);
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn draw_top(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn draw_discard(&mut self) -> Option<Card> {
        self.discard.pop()
    }

    pub fn top_discard(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }
}
