use crate::schema::RulesFile;
use anyhow::{bail, Context};
use phasewild_core::{GameConfig, PhaseGoal};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const RULES_FILE: &str = "rules.json";
const PHASES_FILE: &str = "phases.json";

pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let rules: RulesFile = load_json(dir.join(RULES_FILE))?;
    let phases: Vec<PhaseGoal> = load_json(dir.join(PHASES_FILE))?;
    let config = GameConfig {
        hand_size: rules.hand_size,
        deck: rules.deck,
        phases,
    };
    validate_config(&config).with_context(|| format!("validate {}", dir.display()))?;
    Ok(config)
}

/// Built-in rules when `dir` carries no `rules.json`. A present but broken
/// file is still an error.
pub fn load_game_config_or_default(dir: &Path) -> anyhow::Result<GameConfig> {
    if !dir.join(RULES_FILE).exists() {
        return Ok(GameConfig::standard());
    }
    load_game_config(dir)
}

pub fn validate_config(config: &GameConfig) -> anyhow::Result<()> {
    if config.phases.is_empty() {
        bail!("phase list is empty");
    }
    if config.hand_size == 0 {
        bail!("hand_size must be at least 1");
    }
    if !(1..=12).contains(&config.deck.max_number) {
        bail!("max_number {} outside 1..=12", config.deck.max_number);
    }
    let total = config.deck.total_cards();
    let needed = config.cards_per_deal();
    if total < needed {
        bail!("deck holds {} cards but a deal needs {}", total, needed);
    }
    for (idx, goal) in config.phases.iter().enumerate() {
        if has_empty_group(goal) {
            bail!("phase {} asks for an empty group", idx + 1);
        }
    }
    Ok(())
}

fn has_empty_group(goal: &PhaseGoal) -> bool {
    if goal.sets == 0 && goal.run.is_none() && goal.color.is_none() {
        return true;
    }
    (goal.sets > 0 && goal.set_size == 0)
        || goal.run == Some(0)
        || goal.color == Some(0)
        || goal.set_2 == Some(0)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
