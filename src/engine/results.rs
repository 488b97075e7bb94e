//! Data handed across the engine/UI boundary. Everything here is plain
//! serializable state; nothing borrows from the session.

use serde::{Deserialize, Serialize};

use crate::engine::prefs::PlayMode;
use crate::engine::session::Phase;
use crate::game::{Card, GridPosition, OracleGame};

/// One group as the driving layer sees it: hidden cards stay face down
/// (count only), revealed cards are open information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupView {
    pub group_no: u8,
    pub hidden_count: usize,
    pub revealed: Vec<Card>,
    pub position: GridPosition,
}

pub fn group_views(game: &OracleGame) -> Vec<GroupView> {
    game.groups()
        .map(|(group_no, group)| GroupView {
            group_no,
            hidden_count: group.hidden_len(),
            revealed: group.revealed().to_vec(),
            position: group.position(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub groups: Vec<GroupView>,
    pub current_card: Option<Card>,
    pub mode: PlayMode,
    pub speed_ms: u32,
    pub move_count: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub success: bool,
    pub phase: Phase,
    pub current_card: Option<Card>,
    pub target_group: Option<u8>,
    pub groups: Vec<GroupView>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub success: bool,
    pub is_victory: bool,
    pub phase: Phase,
    pub target_group: Option<u8>,
    pub groups: Vec<GroupView>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintReport {
    pub suggested_group: Option<u8>,
    pub advisories: Vec<String>,
}

/// What a manual-mode click did. A rejected click is informational, not
/// a rules failure: the game state did not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Revealed(RevealResult),
    Placed(PlaceResult),
    Rejected { message: String },
}
