use crate::{Card, CardId, Combo};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Actor {
    Player,
    Computer,
}

impl Actor {
    pub fn opponent(self) -> Actor {
        match self {
            Actor::Player => Actor::Computer,
            Actor::Computer => Actor::Player,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Player => f.write_str("player"),
            Actor::Computer => f.write_str("computer"),
        }
    }
}

/// Whose move it is. Only the player's turn carries draw/submit flags; they
/// live on `GameState`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Turn {
    Player,
    Computer,
}

impl Turn {
    pub fn actor(self) -> Actor {
        match self {
            Turn::Player => Actor::Player,
            Turn::Computer => Actor::Computer,
        }
    }
}

/// One side of the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seat {
    pub hand: Vec<Card>,
    pub play_area: Vec<Combo>,
    /// Zero-based: the seat is attempting phase `phase_index + 1`.
    pub phase_index: usize,
}

impl Seat {
    pub fn has_laid_down(&self) -> bool {
        !self.play_area.is_empty()
    }

    pub(crate) fn clear_table(&mut self) {
        self.hand.clear();
        self.play_area.clear();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub round: u32,
    pub turn: Turn,
    pub has_drawn: bool,
    pub skip_pending: bool,
    pub phase_submitted: bool,
    #[serde(default)]
    pub selected: Option<CardId>,
    #[serde(default)]
    pub finished: Option<Actor>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            round: 1,
            turn: Turn::Player,
            has_drawn: false,
            skip_pending: false,
            phase_submitted: false,
            selected: None,
            finished: None,
        }
    }

    /// Fresh per-turn flags for the player. `skip_pending` is left alone.
    pub fn begin_player_turn(&mut self) {
        self.turn = Turn::Player;
        self.has_drawn = false;
        self.phase_submitted = false;
        self.selected = None;
    }

    pub fn reset_hand(&mut self) {
        self.begin_player_turn();
        self.skip_pending = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
