//! Phase matching: carve sets and runs out of a submitted card multiset.
//!
//! Matching is first-found and greedy. For two-set goals the first set is
//! fixed before the second is looked for, so an input that only splits one
//! particular way can be refused. Callers depend on that order; do not turn
//! this into an exhaustive partition search.

use crate::{sort_run_cards, Card, Combo, GoalShape, PhaseGoal};

pub fn match_phase(cards: &[Card], goal: &PhaseGoal) -> Option<Vec<Combo>> {
    match goal.shape() {
        GoalShape::TwoSets { size } => {
            let first = can_form_set(cards, size)?;
            let rest = remove_cards(cards, &first.cards);
            let second = can_form_set(&rest, size)?;
            Some(vec![first, second])
        }
        GoalShape::SetAndRun { set_size, run } => {
            set_then_run(cards, set_size, run).or_else(|| run_then_set(cards, set_size, run))
        }
        GoalShape::Run { length } => can_form_run(cards, length).map(|combo| vec![combo]),
        GoalShape::Unsupported => None,
    }
}

fn set_then_run(cards: &[Card], set_size: usize, run: usize) -> Option<Vec<Combo>> {
    let set = can_form_set(cards, set_size)?;
    let rest = remove_cards(cards, &set.cards);
    let run = can_form_run(&rest, run)?;
    Some(vec![set, run])
}

fn run_then_set(cards: &[Card], set_size: usize, run: usize) -> Option<Vec<Combo>> {
    let run = can_form_run(cards, run)?;
    let rest = remove_cards(cards, &run.cards);
    let set = can_form_set(&rest, set_size)?;
    Some(vec![run, set])
}

/// First rank, in scan order, that reaches `size` on its own or topped up
/// with wilds.
pub fn can_form_set(cards: &[Card], size: usize) -> Option<Combo> {
    if size == 0 {
        return None;
    }
    let wilds: Vec<Card> = cards.iter().copied().filter(Card::is_wild).collect();
    let mut groups: Vec<(u8, Vec<Card>)> = Vec::new();
    for card in cards {
        let Some(number) = card.number_value() else {
            continue;
        };
        match groups.iter_mut().find(|(rank, _)| *rank == number) {
            Some((_, group)) => group.push(*card),
            None => groups.push((number, vec![*card])),
        }
    }

    for (rank, group) in groups {
        if group.len() >= size {
            return Some(Combo::set(group[..size].to_vec(), rank));
        }
        let needed = size - group.len();
        if needed <= wilds.len() {
            let mut picked = group;
            picked.extend_from_slice(&wilds[..needed]);
            return Some(Combo::set(picked, rank));
        }
    }
    None
}

/// First `length`-combination, in lexicographic position order, whose
/// numbered cards fit a contiguous window that the wilds can fill.
pub fn can_form_run(cards: &[Card], length: usize) -> Option<Combo> {
    if length == 0 {
        return None;
    }
    for indices in Combinations::new(cards.len(), length) {
        let picked: Vec<Card> = indices.iter().map(|&idx| cards[idx]).collect();
        if fits_run(&picked, length) {
            let mut ordered = picked;
            sort_run_cards(&mut ordered);
            return Some(Combo::run(ordered));
        }
    }
    None
}

fn fits_run(picked: &[Card], length: usize) -> bool {
    if picked.iter().any(Card::is_skip) {
        return false;
    }
    let mut real: Vec<u8> = picked.iter().filter_map(Card::number_value).collect();
    // Wild-only groups are never a run.
    if real.is_empty() {
        return false;
    }
    real.sort_unstable();
    if real.windows(2).any(|w| w[0] == w[1]) {
        return false;
    }
    let wilds = picked.len() - real.len();
    let span = (real[real.len() - 1] - real[0]) as usize + 1;
    let gaps = span - real.len();
    span <= length && gaps <= wilds && span <= length + wilds
}

/// Removes one equal card per entry of `used`, earliest first; everything
/// else keeps its order. Cards built without an id compare by face, so two
/// default-id wilds are interchangeable.
pub fn remove_cards(cards: &[Card], used: &[Card]) -> Vec<Card> {
    let mut rest = cards.to_vec();
    for card in used {
        if let Some(pos) = rest.iter().position(|other| other == card) {
            rest.remove(pos);
        }
    }
    rest
}

/// Lexicographic k-combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        let k = self.indices.len();
        let mut pos = k;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.indices[pos] < self.n - k + pos {
                self.indices[pos] += 1;
                for next in pos + 1..k {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}
