use phasewild_core::{
    can_form_run, can_form_set, match_phase, Card, CardId, Color, ComboKind, PhaseGoal,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const R: Color = Color::Red;
const B: Color = Color::Blue;
const G: Color = Color::Green;
const Y: Color = Color::Yellow;

/// Assigns ids in order so cards can be told apart after matching.
fn ids(cards: Vec<Card>) -> Vec<Card> {
    cards
        .into_iter()
        .enumerate()
        .map(|(idx, card)| card.with_id(idx as u32 + 1))
        .collect()
}

fn n(color: Color, value: u8) -> Card {
    Card::number(color, value)
}

fn w() -> Card {
    Card::wild()
}

fn values(cards: &[Card]) -> Vec<Option<u8>> {
    cards.iter().map(Card::number_value).collect()
}

macro_rules! phase_case {
    ($name:ident, $goal:expr, [$($card:expr),* $(,)?], $expected:expr) => {
        #[test]
        fn $name() {
            let cards = ids(vec![$($card),*]);
            let result = match_phase(&cards, &$goal);
            assert_eq!(result.is_some(), $expected, "{:?}", result);
        }
    };
}

phase_case!(
    two_sets_plain,
    PhaseGoal::two_sets(3),
    [n(R, 4), n(B, 4), n(G, 4), n(Y, 7), n(B, 7), n(G, 7)],
    true
);
phase_case!(
    two_sets_with_wilds,
    PhaseGoal::two_sets(3),
    [n(R, 2), w(), n(G, 2), n(Y, 9), w(), n(B, 9)],
    true
);
phase_case!(
    two_sets_short,
    PhaseGoal::two_sets(3),
    [n(R, 2), n(B, 2), n(Y, 9), n(G, 9), w()],
    false
);
phase_case!(
    set_and_run_set_first,
    PhaseGoal::set_and_run(3, 4),
    [n(R, 8), n(B, 8), n(G, 8), n(R, 1), n(B, 2), n(G, 3), n(Y, 4)],
    true
);
phase_case!(
    set_and_run_needs_run_first,
    PhaseGoal::set_and_run(3, 4),
    // Set-first takes the 3s and strands 4-6; run-first leaves the 8s.
    [n(R, 3), n(B, 3), n(G, 3), n(R, 4), n(B, 5), n(G, 6), n(Y, 8), n(B, 8), n(G, 8)],
    true
);
phase_case!(
    set_and_run_missing_run,
    PhaseGoal::set_and_run(4, 4),
    [n(R, 8), n(B, 8), n(G, 8), n(Y, 8), n(R, 1), n(B, 2), n(G, 9)],
    false
);
phase_case!(
    run_of_seven_wild_fills_six,
    PhaseGoal::run(7),
    [n(R, 3), n(B, 4), n(G, 5), n(Y, 7), n(R, 8), n(B, 9), w()],
    true
);
phase_case!(
    run_of_seven_gap_too_wide,
    PhaseGoal::run(7),
    [n(R, 3), n(B, 4), n(G, 5), n(Y, 9), n(R, 10), n(B, 11), w()],
    false
);
phase_case!(
    run_of_eight_from_longer_box,
    PhaseGoal::run(8),
    [n(R, 1), n(B, 2), n(G, 3), n(Y, 4), n(R, 5), n(B, 6), n(G, 7), n(Y, 8), n(R, 12)],
    true
);
phase_case!(
    two_sets_of_four,
    PhaseGoal::two_sets(4),
    [n(R, 10), n(B, 10), w(), w(), n(R, 3), n(B, 3), n(G, 3), n(Y, 10)],
    true
);
phase_case!(
    color_phase_unsupported,
    PhaseGoal::color(7),
    [n(R, 1), n(R, 2), n(R, 3), n(R, 4), n(R, 5), n(R, 6), n(R, 7)],
    false
);
phase_case!(
    set_pair_phase_unsupported,
    PhaseGoal::set_pair(5, 2),
    [n(R, 6), n(B, 6), n(G, 6), n(Y, 6), w(), n(R, 1), n(B, 1)],
    false
);
phase_case!(
    all_wild_run_refused,
    PhaseGoal::run(7),
    [w(), w(), w(), w(), w(), w(), w(), w()],
    false
);

#[test]
fn two_sets_report_anchors_in_order() {
    let cards = ids(vec![n(R, 4), n(B, 4), n(G, 4), n(Y, 7), n(B, 7), n(G, 7)]);
    let combos = match_phase(&cards, &PhaseGoal::two_sets(3)).expect("two sets");
    assert_eq!(combos.len(), 2);
    assert!(combos.iter().all(|c| c.kind == ComboKind::Set));
    assert_eq!(combos[0].anchor, Some(4));
    assert_eq!(combos[1].anchor, Some(7));
}

#[test]
fn two_sets_do_not_backtrack() {
    // The lone 1 is scanned first and takes both wilds, stranding the pairs.
    let cards = ids(vec![n(R, 1), n(R, 5), n(B, 5), n(R, 9), n(B, 9), w(), w()]);
    assert!(match_phase(&cards, &PhaseGoal::two_sets(3)).is_none());

    let reordered = ids(vec![n(R, 5), n(B, 5), n(R, 9), n(B, 9), n(R, 1), w(), w()]);
    let combos = match_phase(&reordered, &PhaseGoal::two_sets(3)).expect("pairs first");
    assert_eq!(combos[0].anchor, Some(5));
    assert_eq!(combos[1].anchor, Some(9));
}

#[test]
fn set_and_run_falls_back_to_run_first() {
    let cards = ids(vec![
        n(R, 3), n(B, 3), n(G, 3), n(R, 4), n(B, 5), n(G, 6), n(Y, 8), n(B, 8), n(G, 8),
    ]);
    let combos = match_phase(&cards, &PhaseGoal::set_and_run(3, 4)).expect("run then set");
    assert_eq!(combos[0].kind, ComboKind::Run);
    assert_eq!(values(&combos[0].cards), vec![Some(3), Some(4), Some(5), Some(6)]);
    assert_eq!(combos[1].kind, ComboKind::Set);
    assert_eq!(combos[1].anchor, Some(8));
}

#[test]
fn cards_without_ids_still_split_into_groups() {
    let cards = vec![n(R, 4), n(B, 4), n(G, 4), n(Y, 7), n(B, 7), n(G, 7)];
    let combos = match_phase(&cards, &PhaseGoal::two_sets(3)).expect("two sets");
    assert_eq!(combos[0].anchor, Some(4));
    assert_eq!(combos[1].anchor, Some(7));

    let cards = vec![n(R, 8), n(B, 8), n(G, 8), n(R, 1), n(B, 2), n(G, 3), n(Y, 4)];
    let combos = match_phase(&cards, &PhaseGoal::set_and_run(3, 4)).expect("set and run");
    assert_eq!(combos[0].anchor, Some(8));
    assert_eq!(values(&combos[1].cards), vec![Some(1), Some(2), Some(3), Some(4)]);

    let cards = vec![n(R, 2), w(), n(G, 2), n(Y, 9), w(), n(B, 9)];
    let combos = match_phase(&cards, &PhaseGoal::two_sets(3)).expect("wilds split");
    assert!(combos.iter().all(|c| c.is_valid() && c.len() == 3));
}

#[test]
fn run_result_is_ascending_with_wild_last() {
    let cards = ids(vec![n(R, 9), w(), n(B, 3), n(G, 8), n(Y, 5), n(R, 4), n(B, 7)]);
    let combos = match_phase(&cards, &PhaseGoal::run(7)).expect("run");
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].kind, ComboKind::Run);
    assert_eq!(
        values(&combos[0].cards),
        vec![Some(3), Some(4), Some(5), Some(7), Some(8), Some(9), None]
    );
}

#[test]
fn run_enumeration_takes_first_combination() {
    // Both 1-4 and 2-5 work; positions 0..4 come first.
    let cards = ids(vec![n(R, 1), n(B, 2), n(G, 3), n(Y, 4), n(R, 5)]);
    let run = can_form_run(&cards, 4).expect("run");
    assert_eq!(values(&run.cards), vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn set_ignores_skips() {
    let cards = ids(vec![Card::skip(), Card::skip(), Card::skip(), n(R, 2)]);
    assert!(can_form_set(&cards, 3).is_none());
}

fn arb_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((0u8..=12, 0usize..4), 0..14).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (value, color))| {
                let card = if value == 0 {
                    Card::wild()
                } else {
                    Card::number(Color::ALL[color], value)
                };
                card.with_id(idx as u32 + 1)
            })
            .collect()
    })
}

fn face_counts(cards: &[Card]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.to_string()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn matches_without_ids_never_overdraw(cards in arb_cards(), phase in 0usize..10) {
        let plain: Vec<Card> = cards.iter().map(|c| Card { id: CardId::default(), ..*c }).collect();
        let goal = &PhaseGoal::standard_phases()[phase];
        if let Some(combos) = match_phase(&plain, goal) {
            let available = face_counts(&plain);
            let used: Vec<Card> = combos.iter().flat_map(|c| c.cards.iter().copied()).collect();
            for (face, count) in face_counts(&used) {
                prop_assert!(available.get(&face).copied().unwrap_or(0) >= count, "{face}");
            }
            prop_assert!(combos.iter().all(|c| c.is_valid()));
        }
        prop_assert_eq!(match_phase(&plain, goal).is_some(), match_phase(&cards, goal).is_some());
    }

    #[test]
    fn matches_are_sound(cards in arb_cards(), phase in 0usize..10) {
        let goal = &PhaseGoal::standard_phases()[phase];
        if let Some(combos) = match_phase(&cards, goal) {
            let input: HashSet<CardId> = cards.iter().map(|c| c.id).collect();
            let mut seen = HashSet::new();
            for combo in &combos {
                prop_assert!(combo.is_valid(), "{:?}", combo);
                for card in &combo.cards {
                    prop_assert!(input.contains(&card.id));
                    prop_assert!(seen.insert(card.id), "card reused: {:?}", card);
                }
            }
        }
    }

    #[test]
    fn matches_are_deterministic(cards in arb_cards(), phase in 0usize..10) {
        let goal = &PhaseGoal::standard_phases()[phase];
        prop_assert_eq!(match_phase(&cards, goal), match_phase(&cards, goal));
    }

    #[test]
    fn combo_sizes_follow_goal(cards in arb_cards()) {
        if let Some(combos) = match_phase(&cards, &PhaseGoal::two_sets(3)) {
            prop_assert!(combos.iter().all(|c| c.len() == 3));
        }
        if let Some(combos) = match_phase(&cards, &PhaseGoal::run(7)) {
            prop_assert_eq!(combos[0].len(), 7);
        }
    }
}
