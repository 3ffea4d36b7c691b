use crate::{Actor, Card};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawSource {
    Deck,
    Discard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    HandDealt {
        round: u32,
        per_hand: usize,
        discard_top: Option<Card>,
    },
    CardDrawn {
        actor: Actor,
        source: DrawSource,
        card: Card,
    },
    DeckEmpty { actor: Actor },
    CardDiscarded { actor: Actor, card: Card },
    SkipPlayed { actor: Actor },
    PhaseLaidDown {
        actor: Actor,
        phase: usize,
        combos: usize,
    },
    ComboExtended {
        actor: Actor,
        combo: usize,
        card: Card,
    },
    RoundEnded {
        winner: Actor,
        round: u32,
        phase_index: usize,
    },
    GameFinished { winner: Actor },
    GameReset,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.queue
    }
}
