use super::*;
use crate::*;
use serde::{Deserialize, Serialize};

/// Serializable full-state view handed to front ends after every action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: u32,
    pub turn: Turn,
    pub has_drawn: bool,
    pub skip_pending: bool,
    pub phase_submitted: bool,
    pub selected: Option<usize>,
    pub hand: Vec<Card>,
    pub submission: Vec<Card>,
    pub player_phase: usize,
    pub player_goal: Option<String>,
    pub player_play_area: Vec<Combo>,
    pub computer_hand_size: usize,
    pub computer_phase: usize,
    pub computer_play_area: Vec<Combo>,
    pub deck_remaining: usize,
    pub discard_top: Option<Card>,
    pub finished: Option<Actor>,
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.state.round,
            turn: self.state.turn,
            has_drawn: self.state.has_drawn,
            skip_pending: self.state.skip_pending,
            phase_submitted: self.state.phase_submitted,
            selected: self.selected_index(),
            hand: self.player.hand.clone(),
            submission: self.submission.clone(),
            player_phase: self.player.phase_index,
            player_goal: self.current_goal(Actor::Player).map(PhaseGoal::describe),
            player_play_area: self.player.play_area.clone(),
            computer_hand_size: self.computer.hand.len(),
            computer_phase: self.computer.phase_index,
            computer_play_area: self.computer.play_area.clone(),
            deck_remaining: self.deck.remaining(),
            discard_top: self.deck.top_discard().copied(),
            finished: self.state.finished,
        }
    }

    /// Every card the game currently holds, wherever it sits.
    pub fn card_count(&self) -> usize {
        let played: usize = self
            .player
            .play_area
            .iter()
            .chain(self.computer.play_area.iter())
            .map(Combo::len)
            .sum();
        self.deck.draw.len()
            + self.deck.discard.len()
            + self.player.hand.len()
            + self.computer.hand.len()
            + self.submission.len()
            + played
    }
}
