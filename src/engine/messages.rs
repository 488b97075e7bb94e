//! Oracle-voiced text for the `message` fields of engine results.
//!
//! Advisory only: callers branch on phase and success flags, never on
//! these strings.

use crate::game::Card;

pub fn msg_welcome() -> String {
    "Welcome to the Oracle of Luck! Are you ready to challenge fate?".to_string()
}

pub fn msg_welcome_back() -> String {
    "Welcome back to the Oracle of Luck! Ready for another challenge?".to_string()
}

pub fn msg_shuffling() -> String {
    "The cards are being shuffled by the forces of destiny...".to_string()
}

pub fn msg_game_start() -> String {
    "Fate has been mixed! Let us begin from the sacred center...".to_string()
}

pub fn msg_victory() -> String {
    "INCREDIBLE! You have achieved the impossible. Every card has found its place. The oracle blesses you with supreme victory!".to_string()
}

pub fn msg_block_defeat() -> String {
    "Oh no! Fate has been blocked. There are no more cards in this group to reveal. You have lost...".to_string()
}

pub fn msg_same_group_defeat(card: Card, group_no: u8) -> String {
    format!(
        "The oracle has spoken! The {} belongs to its own group {} and no card remains there. You have lost...",
        card.label(),
        group_no
    )
}

pub fn msg_card_revealed(card: Card, target_group: u8) -> String {
    format!(
        "A {} has been revealed! It must go to group {}...",
        card.label(),
        target_group
    )
}

pub fn msg_card_placed(target_group: u8) -> String {
    format!(
        "The card has found its destiny in group {}. Let us continue...",
        target_group
    )
}

pub fn msg_next_turn(target_group: u8) -> String {
    format!("Now reveal a card from group {}.", target_group)
}

pub fn msg_target_group_empty(target_group: u8) -> String {
    format!(
        "Group {} has no hidden cards left. Choose another group to continue.",
        target_group
    )
}

pub fn msg_place_required(card: Card, target_group: u8) -> String {
    format!(
        "You must place the {} in group {}.",
        card.label(),
        target_group
    )
}

pub fn msg_group_not_clickable() -> String {
    "This group has no cards to reveal.".to_string()
}

pub fn msg_action_not_allowed() -> String {
    "That action is not allowed in the current game state.".to_string()
}

pub fn msg_current_card_hint(card: Card) -> String {
    format!(
        "The current card ({}) must go to group {}.",
        card.label(),
        card.numeric_value()
    )
}

/// Escalating warning as the hidden piles run out; `None` while plenty
/// of cards remain.
pub fn msg_low_cards_warning(remaining_hidden: usize) -> Option<String> {
    if remaining_hidden <= 5 {
        Some("Careful! Very few cards remain. Fate grows more dangerous...".to_string())
    } else if remaining_hidden <= 10 {
        Some("Attention! The oracle grows more unpredictable with every move...".to_string())
    } else {
        None
    }
}
