use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

impl OracleGame {
    pub fn new_shuffled() -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_seed(rng.gen())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_deck(riffle_shuffle(full_deck(), &mut rng))
    }

    /// Deals an already-shuffled deck: groups 1..=12 take consecutive
    /// 4-card chunks, the center group takes the last four.
    pub fn from_deck(deck: Vec<Card>) -> Self {
        assert_eq!(deck.len(), DECK_SIZE, "a full 52-card deck is required");

        let mut game = Self::empty();
        let mut draw = deck.into_iter();
        for group in game.groups.iter_mut() {
            for _ in 0..GROUP_CAPACITY {
                let card = draw.next().expect("full deck has enough cards");
                group.hidden.push(card);
            }
        }

        game
    }

    /// Table with no cards dealt; the menu-phase state.
    pub(crate) fn empty() -> Self {
        Self {
            groups: std::array::from_fn(|idx| Group::empty(grid_position(idx as u8 + 1))),
            current_card: None,
        }
    }
}

pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Imperfect riffle shuffle: cut near the middle with a small random
/// offset, then interleave bursts of 1-3 cards from a randomly chosen
/// side. Deliberately not a uniform permutation; it emulates a physical
/// shuffle. The output is always the exact multiset of the input.
pub fn riffle_shuffle(cards: Vec<Card>, rng: &mut impl Rng) -> Vec<Card> {
    let len = cards.len();
    if len < 2 {
        return cards;
    }

    let offset: i32 = rng.gen_range(-3..=2);
    let cut = (len as i32 / 2 + offset).clamp(0, len as i32) as usize;
    let (left, right) = cards.split_at(cut);

    let mut merged = Vec::with_capacity(len);
    let mut left_idx = 0;
    let mut right_idx = 0;
    while left_idx < left.len() || right_idx < right.len() {
        let take_left = if left_idx >= left.len() {
            false
        } else if right_idx >= right.len() {
            true
        } else {
            rng.gen_bool(0.5)
        };
        let burst = rng.gen_range(1..=3);

        for _ in 0..burst {
            if take_left && left_idx < left.len() {
                merged.push(left[left_idx]);
                left_idx += 1;
            } else if right_idx < right.len() {
                merged.push(right[right_idx]);
                right_idx += 1;
            } else if left_idx < left.len() {
                // The chosen side ran dry mid-burst; drain the other.
                merged.push(left[left_idx]);
                left_idx += 1;
            }
        }
    }

    merged
}

/// Fixed board map: groups 1..=12 ring the border of a 4x4 grid clockwise
/// from the top-left corner; group 13 holds the 2x2 center.
pub fn grid_position(group_no: u8) -> GridPosition {
    let (row, col, span) = match group_no {
        1 => (0, 0, 1),
        2 => (0, 1, 1),
        3 => (0, 2, 1),
        4 => (0, 3, 1),
        5 => (1, 3, 1),
        6 => (2, 3, 1),
        7 => (3, 3, 1),
        8 => (3, 2, 1),
        9 => (3, 1, 1),
        10 => (3, 0, 1),
        11 => (2, 0, 1),
        12 => (1, 0, 1),
        _ => (1, 1, 2),
    };
    GridPosition { row, col, span }
}
