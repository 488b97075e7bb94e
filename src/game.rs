mod moves;
mod setup;
mod types;

#[cfg(test)]
mod tests;

pub use setup::{full_deck, grid_position, riffle_shuffle};
pub use types::{Card, GridPosition, Group, OracleGame, PlaceOutcome, RevealOutcome, Suit};

pub const GROUP_COUNT: u8 = 13;
pub const CENTER_GROUP: u8 = 13;
pub const GROUP_CAPACITY: usize = 4;
pub const DECK_SIZE: usize = 52;

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}
