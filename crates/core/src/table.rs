use crate::{match_phase, remove_cards, Card, Combo, GameError, PhaseGoal};

pub fn move_to_submission_box(
    hand: &mut Vec<Card>,
    submission: &mut Vec<Card>,
    index: usize,
) -> Result<Card, GameError> {
    let card = take_card(hand, index)?;
    submission.push(card);
    Ok(card)
}

pub fn return_from_submission_box(
    submission: &mut Vec<Card>,
    hand: &mut Vec<Card>,
    index: usize,
) -> Result<Card, GameError> {
    let card = take_card(submission, index)?;
    hand.push(card);
    Ok(card)
}

/// Lays the staged cards down if they satisfy `goal`. Staged cards the
/// matcher did not use go back to the hand. Returns how many combos landed.
pub fn submit_phase(
    submission: &mut Vec<Card>,
    hand: &mut Vec<Card>,
    goal: &PhaseGoal,
    play_area: &mut Vec<Combo>,
) -> Result<usize, GameError> {
    let combos = match_phase(submission, goal).ok_or(GameError::NoMatchingCombination)?;
    let used: Vec<Card> = combos
        .iter()
        .flat_map(|combo| combo.cards.iter().copied())
        .collect();
    hand.extend(remove_cards(submission, &used));
    submission.clear();
    let count = combos.len();
    play_area.extend(combos);
    Ok(count)
}

/// Adds the hand card at `index` to the first combo that takes it.
/// Returns that combo's position in the play area.
pub fn hit_existing_phase(
    hand: &mut Vec<Card>,
    index: usize,
    play_area: &mut [Combo],
) -> Result<usize, GameError> {
    if play_area.is_empty() {
        return Err(GameError::PhaseNotLaidDown);
    }
    let card = *hand.get(index).ok_or(GameError::IndexOutOfRange {
        index,
        len: hand.len(),
    })?;
    let target = play_area
        .iter()
        .position(|combo| combo.accepts(&card))
        .ok_or(GameError::NoValidExtensionTarget)?;
    hand.remove(index);
    play_area[target].extend(card);
    Ok(target)
}

pub(crate) fn take_card(cards: &mut Vec<Card>, index: usize) -> Result<Card, GameError> {
    if index >= cards.len() {
        return Err(GameError::IndexOutOfRange {
            index,
            len: cards.len(),
        });
    }
    Ok(cards.remove(index))
}
