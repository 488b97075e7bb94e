use crate::engine::messages;
use crate::engine::session::{GameSession, Phase};
use crate::engine::stats;

/// Advisory strings derived from the board statistics and the in-flight
/// card. Read-only; empty outside the Playing phase.
pub fn movement_hints(session: &GameSession) -> Vec<String> {
    if session.phase() != Phase::Playing {
        return Vec::new();
    }

    let mut hints = Vec::new();
    let remaining = stats::total_hidden(session.game());
    if let Some(warning) = messages::msg_low_cards_warning(remaining) {
        hints.push(warning);
    }
    if let Some(card) = session.game().current_card() {
        hints.push(messages::msg_current_card_hint(card));
    }
    hints
}
