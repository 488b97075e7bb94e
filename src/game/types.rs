use serde::{Deserialize, Serialize};

use super::{rank_label, GROUP_CAPACITY, GROUP_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "\u{2663}",
            Suit::Diamonds => "\u{2666}",
            Suit::Hearts => "\u{2665}",
            Suit::Spades => "\u{2660}",
        }
    }
}

/// A playing card. Rank runs 1..=13 (ace low, king high); the rank doubles
/// as the card's destination group number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    pub fn numeric_value(&self) -> u8 {
        self.rank
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }
}

/// Cell assignment on the 4x4 display grid. `span` is 1 for the twelve
/// ring groups and 2 for the center group, which covers a 2x2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u8,
    pub col: u8,
    pub span: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub(super) hidden: Vec<Card>,
    pub(super) revealed: Vec<Card>,
    pub(super) position: GridPosition,
}

impl Group {
    pub(super) fn empty(position: GridPosition) -> Self {
        Self {
            hidden: Vec::new(),
            revealed: Vec::new(),
            position,
        }
    }

    pub fn hidden_len(&self) -> usize {
        self.hidden.len()
    }

    pub fn hidden_is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.hidden.len() == GROUP_CAPACITY
    }

    /// Next card a reveal would produce, without removing it.
    pub fn front_hidden(&self) -> Option<Card> {
        self.hidden.first().copied()
    }

    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }
}

/// The card table: thirteen groups plus the single card in transit between
/// a reveal and its placement. Once dealt, the union of every hidden pile,
/// every revealed pile, and `current_card` is always the full 52-card deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleGame {
    pub(super) groups: [Group; 13],
    pub(super) current_card: Option<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The front card came off the hidden pile and is now in flight.
    Revealed { card: Card, target_group: u8 },
    /// The chosen group had no hidden cards left: block loss.
    EmptyGroup,
    /// The card belongs to its own origin group and no hidden card remains
    /// there to ever continue from it: same-group loss. The card stays in
    /// flight so the caller can still display it.
    SameGroupDeadEnd { card: Card },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed { target_group: u8 },
    /// Placement emptied the last hidden pile.
    Won { target_group: u8 },
}

impl OracleGame {
    pub fn group(&self, group_no: u8) -> Option<&Group> {
        Self::index(group_no).map(|idx| &self.groups[idx])
    }

    pub(super) fn group_mut(&mut self, group_no: u8) -> Option<&mut Group> {
        Self::index(group_no).map(|idx| &mut self.groups[idx])
    }

    /// Groups in number order, 1..=13.
    pub fn groups(&self) -> impl Iterator<Item = (u8, &Group)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(idx, group)| (idx as u8 + 1, group))
    }

    pub fn current_card(&self) -> Option<Card> {
        self.current_card
    }

    pub fn has_hidden_cards(&self) -> bool {
        self.groups.iter().any(|group| !group.hidden.is_empty())
    }

    pub fn all_hidden_empty(&self) -> bool {
        !self.has_hidden_cards()
    }

    fn index(group_no: u8) -> Option<usize> {
        (1..=GROUP_COUNT)
            .contains(&group_no)
            .then(|| usize::from(group_no - 1))
    }
}
