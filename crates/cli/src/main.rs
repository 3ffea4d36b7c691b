use phasewild_core::{
    format_cards, match_phase, Actor, Card, CardId, Combo, ComboKind, DrawSource, Event, EventBus,
    Game, GameConfig, GameError, RngState, Turn, TurnOutcome,
};
use phasewild_data::load_game_config_or_default;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 0xC0FFEE;
const DEFAULT_AUTO_TURNS: usize = 40;

#[derive(Debug, Clone)]
struct CliOptions {
    seed: u64,
    assets: PathBuf,
    auto: Option<usize>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut seed = DEFAULT_SEED;
    let mut assets = PathBuf::from("assets");
    let mut auto = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().unwrap_or(DEFAULT_SEED);
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    assets = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--auto" => {
                let turns = args.get(idx + 1).and_then(|value| value.parse::<usize>().ok());
                if turns.is_some() {
                    idx += 1;
                }
                auto = Some(turns.unwrap_or(DEFAULT_AUTO_TURNS));
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions { seed, assets, auto }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let config = match load_game_config_or_default(&options.assets) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err:#}");
            std::process::exit(1);
        }
    };
    match options.auto {
        Some(turns) => run_auto(config, options.seed, turns),
        None => run_interactive(config, options.seed),
    }
}

fn run_interactive(config: GameConfig, seed: u64) {
    let mut events = EventBus::default();
    let mut game = Game::new(config, seed);
    println!("seed: {seed}");
    print_help();
    print_state(&game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        let result = match cmd {
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "quit" | "exit" | "q" => break,
            "hand" | "state" | "s" => {
                print_state(&game);
                continue;
            }
            "goal" => {
                print_goal(&game);
                continue;
            }
            "json" => {
                match serde_json::to_string_pretty(&game.snapshot()) {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("snapshot error: {err}"),
                }
                continue;
            }
            "reset" => {
                game.reset_game(&mut events);
                Ok(())
            }
            "draw" | "d" => {
                let from_discard = matches!(args.first(), Some(&"discard") | Some(&"pile"));
                game.draw_card(Actor::Player, from_discard, &mut events)
                    .map(|_| ())
            }
            "select" | "sel" => match parse_single_index(&args) {
                Ok(index) => game.select_card(index).map(|_| ()),
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            },
            "discard" | "x" => game
                .discard_selected(&mut events)
                .and_then(|outcome| follow_outcome(&mut game, outcome, &mut events)),
            "stage" | "add" => match parse_indices_result(&args) {
                Ok(indices) => stage_cards(&mut game, &indices),
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            },
            "unstage" | "remove" => match parse_single_index(&args) {
                Ok(index) => game.remove_from_submission_box(index).map(|_| ()),
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            },
            "submit" => game.submit_phase(&mut events).and_then(|(count, outcome)| {
                println!("laid down {count} combo(s)");
                follow_outcome(&mut game, outcome, &mut events)
            }),
            "hit" => match parse_single_index(&args) {
                Ok(index) => game.hit_existing_phase(index, &mut events).and_then(
                    |(combo, outcome)| {
                        println!("extended combo {combo}");
                        follow_outcome(&mut game, outcome, &mut events)
                    },
                ),
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            },
            _ => {
                eprintln!("unknown command '{cmd}', try 'help'");
                continue;
            }
        };
        if let Err(err) = result {
            eprintln!("error: {err}");
        }
        drain_events(&mut events);
        print_state(&game);
    }
}

/// After the player passes the turn the computer moves straight away.
fn follow_outcome(
    game: &mut Game,
    outcome: TurnOutcome,
    events: &mut EventBus,
) -> Result<(), GameError> {
    match outcome {
        TurnOutcome::ComputerToMove => {
            let next = game.run_computer_turn(events)?;
            if let TurnOutcome::RoundOver { winner, round } = next {
                println!("round {round} goes to the {winner}");
            }
        }
        TurnOutcome::PlayerAgain => println!("skip played, your turn again"),
        TurnOutcome::RoundOver { winner, round } => println!("round {round} goes to the {winner}"),
        TurnOutcome::PlayerToMove | TurnOutcome::PlayerContinues => {}
    }
    Ok(())
}

/// Indices address the hand as it was when the command was typed.
fn stage_cards(game: &mut Game, indices: &[usize]) -> Result<(), GameError> {
    let len = game.player.hand.len();
    let mut ids: Vec<CardId> = Vec::with_capacity(indices.len());
    for &index in indices {
        let card = game
            .player
            .hand
            .get(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;
        if !ids.contains(&card.id) {
            ids.push(card.id);
        }
    }
    for id in ids {
        if let Some(position) = game.player.hand.iter().position(|card| card.id == id) {
            game.add_to_submission_box(position)?;
        }
    }
    Ok(())
}

fn run_auto(config: GameConfig, seed: u64, turns: usize) {
    let mut events = EventBus::default();
    let mut game = Game::new(config, seed);
    let mut chooser = RngState::from_seed(seed.wrapping_add(1));
    println!("seed: {seed}, turns: {turns}");

    for _ in 0..turns {
        if game.winner().is_some() {
            break;
        }
        if game.state.turn == Turn::Computer {
            if let Err(err) = game.run_computer_turn(&mut events) {
                eprintln!("computer error: {err}");
                break;
            }
            drain_events(&mut events);
            continue;
        }
        if let Err(err) = auto_player_turn(&mut game, &mut chooser, &mut events) {
            eprintln!("player error: {err}");
            break;
        }
        drain_events(&mut events);
    }

    println!(
        "round {} | player phase {} | computer phase {}",
        game.state.round,
        game.player.phase_index + 1,
        game.computer.phase_index + 1
    );
    if let Some(winner) = game.winner() {
        println!("winner: {winner}");
    }
}

/// Draws, lays down if the hand already matches, hits what fits, then
/// throws a random card.
fn auto_player_turn(
    game: &mut Game,
    chooser: &mut RngState,
    events: &mut EventBus,
) -> Result<(), GameError> {
    game.draw_card(Actor::Player, false, events)?;
    if !game.player.has_laid_down() {
        let goal = game.current_goal(Actor::Player).cloned();
        if let Some(combos) = goal.and_then(|goal| match_phase(&game.player.hand, &goal)) {
            let staged: Vec<usize> = combos
                .iter()
                .flat_map(|combo| combo.cards.iter())
                .filter_map(|card| game.player.hand.iter().position(|c| c.id == card.id))
                .collect();
            stage_cards(game, &staged)?;
            if let (_, TurnOutcome::RoundOver { .. }) = game.submit_phase(events)? {
                return Ok(());
            }
        }
    }
    if game.player.has_laid_down() {
        let mut index = 0;
        while index < game.player.hand.len() && game.player.hand.len() > 1 {
            match game.hit_existing_phase(index, events) {
                Ok(_) => {}
                Err(GameError::NoValidExtensionTarget) => index += 1,
                Err(err) => return Err(err),
            }
        }
    }
    let Some(index) = chooser.pick_index(game.player.hand.len()) else {
        return Ok(());
    };
    game.select_card(index)?;
    let outcome = game.discard_selected(events)?;
    if let TurnOutcome::RoundOver { winner, round } = outcome {
        println!("round {round} goes to the {winner}");
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  hand | state          show the table");
    println!("  draw [discard]        draw from the deck or the discard pile");
    println!("  select N              pick the card to discard");
    println!("  discard               discard the selected card");
    println!("  stage N[,M..]         move hand cards into the submission box");
    println!("  unstage N             move a staged card back to the hand");
    println!("  submit                lay down the staged cards as your phase");
    println!("  hit N                 add a hand card to your laid-down combos");
    println!("  goal                  show both players' goals");
    println!("  json                  dump the full state as JSON");
    println!("  reset                 start a new game");
    println!("  help | quit");
}

fn print_goal(game: &Game) {
    for actor in [Actor::Player, Actor::Computer] {
        let seat = game.seat(actor);
        let goal = game
            .current_goal(actor)
            .map(|goal| goal.describe())
            .unwrap_or_else(|| "done".to_string());
        println!(
            "{actor}: phase {} ({goal}), {} cards in hand",
            seat.phase_index + 1,
            game.hand_len(actor)
        );
    }
}

fn print_state(game: &Game) {
    let snapshot = game.snapshot();
    println!(
        "== Round {} | {} to move ==",
        snapshot.round,
        match snapshot.turn {
            Turn::Player => "player",
            Turn::Computer => "computer",
        }
    );
    if let Some(winner) = snapshot.finished {
        println!("game over, {winner} wins (type 'reset' to play again)");
    }
    println!(
        "phase {}: {}",
        snapshot.player_phase + 1,
        snapshot.player_goal.as_deref().unwrap_or("done")
    );
    println!(
        "deck {} | discard top {}",
        snapshot.deck_remaining,
        snapshot
            .discard_top
            .map(|card| card.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "drawn: {} | laid down this turn: {}",
        snapshot.has_drawn, snapshot.phase_submitted
    );
    println!("{:>4}  {}", "idx", "card");
    for (idx, card) in snapshot.hand.iter().enumerate() {
        let marker = if snapshot.selected == Some(idx) { "*" } else { " " };
        println!("{:>4}{} {}", idx, marker, card);
    }
    if !snapshot.submission.is_empty() {
        println!("staged: {}", indexed_cards(&snapshot.submission));
    }
    print_play_area("your table", &snapshot.player_play_area);
    println!(
        "computer: {} cards, phase {}",
        snapshot.computer_hand_size,
        snapshot.computer_phase + 1
    );
    print_play_area("computer table", &snapshot.computer_play_area);
}

fn print_play_area(label: &str, combos: &[Combo]) {
    if combos.is_empty() {
        return;
    }
    println!("{label}:");
    for (idx, combo) in combos.iter().enumerate() {
        println!("  {idx}: {}", format_combo(combo));
    }
}

fn indexed_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(idx, card)| format!("{idx}:{card}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_combo(combo: &Combo) -> String {
    match combo.kind {
        ComboKind::Set => match combo.anchor {
            Some(anchor) => format!("set of {anchor}s [{}]", format_cards(&combo.cards)),
            None => format!("set [{}]", format_cards(&combo.cards)),
        },
        ComboKind::Run => format!("run [{}]", format_cards(&combo.cards)),
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::HandDealt {
            round,
            per_hand,
            discard_top,
        } => format!(
            "round {round} dealt, {per_hand} cards each, discard shows {}",
            discard_top
                .map(|card| card.to_string())
                .unwrap_or_else(|| "-".to_string())
        ),
        Event::CardDrawn {
            actor,
            source,
            card,
        } => match (actor, source) {
            (Actor::Computer, _) => "computer drew a card".to_string(),
            (_, DrawSource::Deck) => format!("{actor} drew {card} from the deck"),
            (_, DrawSource::Discard) => format!("{actor} took {card} from the discard pile"),
        },
        Event::DeckEmpty { actor } => format!("deck is empty, {actor} drew nothing"),
        Event::CardDiscarded { actor, card } => format!("{actor} discarded {card}"),
        Event::SkipPlayed { actor } => format!("{actor} skipped the opponent"),
        Event::PhaseLaidDown {
            actor,
            phase,
            combos,
        } => format!("{actor} laid down phase {} ({combos} combos)", phase + 1),
        Event::ComboExtended { actor, combo, card } => {
            format!("{actor} hit {card} onto combo {combo}")
        }
        Event::RoundEnded {
            winner,
            round,
            phase_index,
        } => format!(
            "{winner} went out in round {round}, now on phase {}",
            phase_index + 1
        ),
        Event::GameFinished { winner } => format!("{winner} finished every phase"),
        Event::GameReset => "new game".to_string(),
    }
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        println!("event: {}", format_event(&event));
    }
}

fn parse_single_index(args: &[&str]) -> Result<usize, String> {
    let indices = parse_indices_result(args)?;
    match indices.as_slice() {
        [index] => Ok(*index),
        _ => Err("expected a single index".to_string()),
    }
}

fn parse_indices_result(args: &[&str]) -> Result<Vec<usize>, String> {
    if args.is_empty() {
        return Err("missing indices".to_string());
    }
    let mut indices = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some((start, end)) = part.split_once('-') {
                let start = start
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range start".to_string())?;
                let end = end
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range end".to_string())?;
                if start > end {
                    return Err("range start larger than end".to_string());
                }
                indices.extend(start..=end);
            } else {
                let idx = part
                    .parse::<usize>()
                    .map_err(|_| format!("invalid index '{part}'"))?;
                indices.push(idx);
            }
        }
    }
    if indices.is_empty() {
        return Err("missing indices".to_string());
    }
    Ok(indices)
}
