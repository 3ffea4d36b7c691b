use super::*;
use crate::*;

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut game = Self {
            deck: Deck::default(),
            rng: RngState::from_seed(seed),
            config,
            player: Seat::default(),
            computer: Seat::default(),
            submission: Vec::new(),
            state: GameState::new(),
        };
        game.deal();
        game
    }

    pub fn standard(seed: u64) -> Self {
        Self::new(GameConfig::standard(), seed)
    }

    /// Back to round one, phase one for both seats. The RNG keeps running,
    /// so the new deal differs from the first one.
    pub fn reset_game(&mut self, events: &mut EventBus) {
        self.player = Seat::default();
        self.computer = Seat::default();
        self.state = GameState::new();
        events.push(Event::GameReset);
        self.deal_with_event(events);
    }

    pub(super) fn end_round(&mut self, winner: Actor, events: &mut EventBus) -> TurnOutcome {
        let round = self.state.round;
        let seat = self.seat_mut(winner);
        seat.phase_index += 1;
        let phase_index = seat.phase_index;
        self.state.round += 1;
        events.push(Event::RoundEnded {
            winner,
            round,
            phase_index,
        });
        if phase_index >= self.config.phase_count() {
            self.state.finished = Some(winner);
            events.push(Event::GameFinished { winner });
        }
        self.deal_with_event(events);
        TurnOutcome::RoundOver { winner, round }
    }

    fn deal_with_event(&mut self, events: &mut EventBus) {
        self.deal();
        events.push(Event::HandDealt {
            round: self.state.round,
            per_hand: self.config.hand_size,
            discard_top: self.deck.top_discard().copied(),
        });
    }

    /// Fresh shuffled deck, one card seeding the discard pile, then a full
    /// hand to the player and then to the computer.
    fn deal(&mut self) {
        let mut deck = Deck::phase_deck(&self.config.deck);
        deck.shuffle(&mut self.rng);
        if let Some(card) = deck.draw_top() {
            deck.discard(card);
        }
        self.player.clear_table();
        self.computer.clear_table();
        self.player.hand = deck.draw_cards(self.config.hand_size);
        self.computer.hand = deck.draw_cards(self.config.hand_size);
        self.submission.clear();
        self.deck = deck;
        self.state.reset_hand();
    }
}
