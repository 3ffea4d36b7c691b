use crate::{Actor, Card, Deck, GameConfig, GameState, PhaseGoal, RngState, Seat, Turn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod computer;
mod deal;
mod turn;
mod view;

pub use view::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("not your turn")]
    NotYourTurn,
    #[error("already drew this turn")]
    AlreadyDrawn,
    #[error("phase already submitted this turn")]
    PhaseSubmitted,
    #[error("cards do not satisfy the phase goal")]
    NoMatchingCombination,
    #[error("no laid-down combo accepts that card")]
    NoValidExtensionTarget,
    #[error("no card selected")]
    NoCardSelected,
    #[error("phase not laid down yet")]
    PhaseNotLaidDown,
    #[error("phase already laid down this round")]
    PhaseAlreadyLaidDown,
    #[error("game over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A skip was discarded; the player moves again.
    PlayerAgain,
    ComputerToMove,
    PlayerToMove,
    /// A lay-down or hit left the player holding cards; the turn goes on.
    PlayerContinues,
    RoundOver { winner: Actor, round: u32 },
}

/// One game between the player and the computer. Every operation takes the
/// game explicitly; nothing is shared.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub player: Seat,
    pub computer: Seat,
    pub submission: Vec<Card>,
    pub state: GameState,
}

impl Game {
    pub fn seat(&self, actor: Actor) -> &Seat {
        match actor {
            Actor::Player => &self.player,
            Actor::Computer => &self.computer,
        }
    }

    pub fn seat_mut(&mut self, actor: Actor) -> &mut Seat {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Computer => &mut self.computer,
        }
    }

    pub fn hand_len(&self, actor: Actor) -> usize {
        self.seat(actor).hand.len()
    }

    /// Goal the actor is working on; `None` once past the last phase.
    pub fn current_goal(&self, actor: Actor) -> Option<&PhaseGoal> {
        self.config.phase(self.seat(actor).phase_index)
    }

    pub fn winner(&self) -> Option<Actor> {
        self.state.finished
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.state.selected?;
        self.player.hand.iter().position(|card| card.id == id)
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.selected_index().map(|idx| &self.player.hand[idx])
    }

    /// Staged cards are still the player's; the round ends only once the
    /// hand and the submission box are both empty.
    fn player_is_out(&self) -> bool {
        self.player.hand.is_empty() && self.submission.is_empty()
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.state.finished.is_some() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn ensure_player_turn(&self) -> Result<(), GameError> {
        self.ensure_active()?;
        if self.state.turn != Turn::Player {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }
}
