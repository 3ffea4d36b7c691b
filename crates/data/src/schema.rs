use phasewild_core::DeckRule;
use serde::{Deserialize, Serialize};

/// Contents of `rules.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesFile {
    pub hand_size: usize,
    #[serde(default)]
    pub deck: DeckRule,
}
