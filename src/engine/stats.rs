use serde::{Deserialize, Serialize};

use crate::game::OracleGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    pub total_hidden: usize,
    pub total_revealed: usize,
    /// Groups whose hidden pile has run out.
    pub empty_groups: usize,
    /// Groups still holding their full 4-card hidden quota.
    pub full_groups: usize,
    /// Revealed cards over the 52-card deck, rounded to whole percent.
    pub completion_percent: u8,
}

pub fn total_hidden(game: &OracleGame) -> usize {
    game.groups().map(|(_, group)| group.hidden_len()).sum()
}

pub fn total_revealed(game: &OracleGame) -> usize {
    game.groups().map(|(_, group)| group.revealed().len()).sum()
}

pub fn completion_percent(game: &OracleGame) -> u8 {
    let revealed = total_revealed(game);
    let total = revealed + total_hidden(game) + usize::from(game.current_card().is_some());
    if total == 0 {
        return 0;
    }
    ((revealed as f64 / total as f64) * 100.0).round() as u8
}

pub fn board_stats(game: &OracleGame) -> BoardStats {
    let mut empty_groups = 0;
    let mut full_groups = 0;
    for (_, group) in game.groups() {
        if group.hidden_is_empty() {
            empty_groups += 1;
        } else if group.is_full() {
            full_groups += 1;
        }
    }

    BoardStats {
        total_hidden: total_hidden(game),
        total_revealed: total_revealed(game),
        empty_groups,
        full_groups,
        completion_percent: completion_percent(game),
    }
}
