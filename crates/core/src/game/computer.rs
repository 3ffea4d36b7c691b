use super::*;
use crate::*;

impl Game {
    /// The computer draws from the deck and throws away a random card. It
    /// never lays down or hits.
    pub fn run_computer_turn(&mut self, events: &mut EventBus) -> Result<TurnOutcome, GameError> {
        self.ensure_active()?;
        if self.state.turn != Turn::Computer {
            return Err(GameError::NotYourTurn);
        }
        self.draw_card(Actor::Computer, false, events)?;
        if let Some(index) = self.rng.pick_index(self.computer.hand.len()) {
            let card = self.computer.hand.remove(index);
            self.deck.discard(card);
            events.push(Event::CardDiscarded {
                actor: Actor::Computer,
                card,
            });
        }
        if self.computer.hand.is_empty() {
            return Ok(self.end_round(Actor::Computer, events));
        }
        self.state.begin_player_turn();
        Ok(TurnOutcome::PlayerToMove)
    }
}
