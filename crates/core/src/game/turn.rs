use super::*;
use crate::*;

impl Game {
    /// Draws for `actor`. The player may draw once per turn and not after
    /// laying down; the computer always draws from the deck. An empty pile
    /// yields `Ok(None)` and still counts as the player's draw.
    pub fn draw_card(
        &mut self,
        actor: Actor,
        from_discard: bool,
        events: &mut EventBus,
    ) -> Result<Option<Card>, GameError> {
        self.ensure_active()?;
        if self.state.turn.actor() != actor {
            return Err(GameError::NotYourTurn);
        }
        let drawn = match actor {
            Actor::Player => {
                if self.state.phase_submitted {
                    return Err(GameError::PhaseSubmitted);
                }
                if self.state.has_drawn {
                    return Err(GameError::AlreadyDrawn);
                }
                let from_pile = if from_discard {
                    self.deck.draw_discard()
                } else {
                    None
                };
                self.state.has_drawn = true;
                match from_pile {
                    Some(card) => Some((card, DrawSource::Discard)),
                    None => self.deck.draw_top().map(|card| (card, DrawSource::Deck)),
                }
            }
            Actor::Computer => self.deck.draw_top().map(|card| (card, DrawSource::Deck)),
        };
        let Some((card, source)) = drawn else {
            events.push(Event::DeckEmpty { actor });
            return Ok(None);
        };
        self.seat_mut(actor).hand.push(card);
        events.push(Event::CardDrawn {
            actor,
            source,
            card,
        });
        Ok(Some(card))
    }

    pub fn select_card(&mut self, index: usize) -> Result<Card, GameError> {
        self.ensure_player_turn()?;
        let card = *self
            .player
            .hand
            .get(index)
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.player.hand.len(),
            })?;
        self.state.selected = Some(card.id);
        Ok(card)
    }

    pub fn add_to_submission_box(&mut self, index: usize) -> Result<Card, GameError> {
        self.ensure_player_turn()?;
        let card = table::move_to_submission_box(&mut self.player.hand, &mut self.submission, index)?;
        if self.state.selected == Some(card.id) {
            self.state.selected = None;
        }
        Ok(card)
    }

    pub fn remove_from_submission_box(&mut self, index: usize) -> Result<Card, GameError> {
        self.ensure_player_turn()?;
        table::return_from_submission_box(&mut self.submission, &mut self.player.hand, index)
    }

    /// Discards the selected card and ends the player's turn, unless the card
    /// is a skip (the player goes again) or the hand is now empty (the round
    /// ends). Whether the player drew first is not checked.
    pub fn discard_selected(&mut self, events: &mut EventBus) -> Result<TurnOutcome, GameError> {
        self.ensure_player_turn()?;
        let index = self.selected_index().ok_or(GameError::NoCardSelected)?;
        let card = self.player.hand.remove(index);
        self.state.selected = None;
        self.deck.discard(card);
        events.push(Event::CardDiscarded {
            actor: Actor::Player,
            card,
        });
        self.state.has_drawn = false;
        self.state.phase_submitted = false;

        if self.player_is_out() {
            return Ok(self.end_round(Actor::Player, events));
        }
        if card.is_skip() {
            self.state.skip_pending = true;
            events.push(Event::SkipPlayed {
                actor: Actor::Player,
            });
            return Ok(TurnOutcome::PlayerAgain);
        }
        self.state.skip_pending = false;
        self.state.turn = Turn::Computer;
        Ok(TurnOutcome::ComputerToMove)
    }

    /// Lays the submission box down against the player's current goal.
    /// Returns the number of combos placed and what happens next.
    pub fn submit_phase(
        &mut self,
        events: &mut EventBus,
    ) -> Result<(usize, TurnOutcome), GameError> {
        self.ensure_player_turn()?;
        if self.player.has_laid_down() {
            return Err(GameError::PhaseAlreadyLaidDown);
        }
        let phase = self.player.phase_index;
        let goal = self.config.phase(phase).ok_or(GameError::GameOver)?;
        let combos = table::submit_phase(
            &mut self.submission,
            &mut self.player.hand,
            goal,
            &mut self.player.play_area,
        )?;
        self.state.phase_submitted = true;
        events.push(Event::PhaseLaidDown {
            actor: Actor::Player,
            phase,
            combos,
        });
        Ok((combos, self.after_play(events)))
    }

    /// Hits the hand card at `index` onto the player's own combos. Returns
    /// the index of the combo that took it and what happens next.
    pub fn hit_existing_phase(
        &mut self,
        index: usize,
        events: &mut EventBus,
    ) -> Result<(usize, TurnOutcome), GameError> {
        self.ensure_player_turn()?;
        let card = self.player.hand.get(index).copied();
        let combo = table::hit_existing_phase(&mut self.player.hand, index, &mut self.player.play_area)?;
        if let Some(card) = card {
            if self.state.selected == Some(card.id) {
                self.state.selected = None;
            }
            events.push(Event::ComboExtended {
                actor: Actor::Player,
                combo,
                card,
            });
        }
        Ok((combo, self.after_play(events)))
    }

    fn after_play(&mut self, events: &mut EventBus) -> TurnOutcome {
        if self.player_is_out() {
            self.end_round(Actor::Player, events)
        } else {
            TurnOutcome::PlayerContinues
        }
    }
}
