use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::engine::layout::validate_layout;
use crate::engine::session::{GameSession, Phase};

fn card(suit: Suit, rank: u8) -> Card {
    Card { suit, rank }
}

fn empty_game() -> OracleGame {
    OracleGame::empty()
}

fn all_cards(game: &OracleGame) -> Vec<Card> {
    let mut cards: Vec<Card> = game
        .groups
        .iter()
        .flat_map(|group| group.hidden.iter().chain(group.revealed.iter()))
        .copied()
        .collect();
    cards.extend(game.current_card);
    cards
}

fn deck_intact(game: &OracleGame) -> bool {
    let cards = all_cards(game);
    cards.len() == DECK_SIZE && cards.iter().collect::<HashSet<_>>().len() == DECK_SIZE
}

#[test]
fn full_deck_has_52_unique_cards() {
    let deck = full_deck();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.iter().collect::<HashSet<_>>().len(), DECK_SIZE);
    for suit in Suit::ALL {
        assert_eq!(deck.iter().filter(|card| card.suit == suit).count(), 13);
    }
    assert!(deck.iter().all(|card| (1..=13).contains(&card.rank)));
}

#[test]
fn rank_labels_are_correct() {
    assert_eq!(rank_label(1), "A");
    assert_eq!(rank_label(11), "J");
    assert_eq!(rank_label(12), "Q");
    assert_eq!(rank_label(13), "K");
    assert_eq!(rank_label(99), "?");
}

#[test]
fn card_metadata_is_derived_from_suit_and_rank() {
    let queen = card(Suit::Hearts, 12);
    assert_eq!(queen.numeric_value(), 12);
    assert!(queen.is_red());
    assert_eq!(queen.label(), "QH");

    let ace = card(Suit::Spades, 1);
    assert_eq!(ace.numeric_value(), 1);
    assert!(!ace.is_red());
    assert_eq!(ace.label(), "AS");
}

#[test]
fn riffle_shuffle_preserves_card_multiset() {
    let mut rng = StdRng::seed_from_u64(7);
    let shuffled = riffle_shuffle(full_deck(), &mut rng);

    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(
        shuffled.iter().collect::<HashSet<_>>(),
        full_deck().iter().collect::<HashSet<_>>()
    );
}

#[test]
fn riffle_shuffle_is_reproducible_for_a_seed() {
    let mut rng_a = StdRng::seed_from_u64(9);
    let mut rng_b = StdRng::seed_from_u64(9);
    let mut rng_c = StdRng::seed_from_u64(10);

    let shuffle_a = riffle_shuffle(full_deck(), &mut rng_a);
    let shuffle_b = riffle_shuffle(full_deck(), &mut rng_b);
    let shuffle_c = riffle_shuffle(full_deck(), &mut rng_c);

    assert_eq!(shuffle_a, shuffle_b);
    assert_ne!(shuffle_a, shuffle_c);
}

#[test]
fn riffle_shuffle_passes_tiny_decks_through() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(riffle_shuffle(Vec::new(), &mut rng).is_empty());

    let single = vec![card(Suit::Clubs, 4)];
    assert_eq!(riffle_shuffle(single.clone(), &mut rng), single);
}

#[test]
fn dealing_assigns_four_consecutive_cards_per_group() {
    let deck = full_deck();
    let game = OracleGame::from_deck(deck.clone());

    for (group_no, group) in game.groups() {
        let start = usize::from(group_no - 1) * GROUP_CAPACITY;
        assert_eq!(group.hidden, deck[start..start + GROUP_CAPACITY].to_vec());
        assert!(group.revealed.is_empty());
    }
    assert!(game.current_card().is_none());
    assert!(deck_intact(&game));
}

#[test]
fn dealing_stamps_ring_and_center_positions() {
    let game = OracleGame::from_deck(full_deck());

    let corner = game.group(1).unwrap().position();
    assert_eq!((corner.row, corner.col, corner.span), (0, 0, 1));

    let opposite = game.group(7).unwrap().position();
    assert_eq!((opposite.row, opposite.col, opposite.span), (3, 3, 1));

    let center = game.group(CENTER_GROUP).unwrap().position();
    assert_eq!((center.row, center.col, center.span), (1, 1, 2));
}

#[test]
fn new_shuffled_deal_accounts_for_the_full_deck() {
    let game = OracleGame::new_shuffled();

    assert!(deck_intact(&game));
    assert!(game.current_card().is_none());
    for (_, group) in game.groups() {
        assert_eq!(group.hidden_len(), GROUP_CAPACITY);
        assert!(group.revealed().is_empty());
    }
}

#[test]
fn seeded_games_are_deterministic() {
    let game_a = OracleGame::new_with_seed(42);
    let game_b = OracleGame::new_with_seed(42);
    let game_c = OracleGame::new_with_seed(43);

    assert_eq!(game_a, game_b);
    assert_ne!(game_a, game_c);
}

#[test]
fn reveal_pops_front_card_into_flight() {
    let mut game = empty_game();
    game.groups[1].hidden.push(card(Suit::Hearts, 9));
    game.groups[1].hidden.push(card(Suit::Clubs, 3));

    assert_eq!(game.groups[1].front_hidden(), Some(card(Suit::Hearts, 9)));
    let outcome = game.reveal_from_group(2);

    assert_eq!(
        outcome,
        RevealOutcome::Revealed {
            card: card(Suit::Hearts, 9),
            target_group: 9,
        }
    );
    assert_eq!(game.current_card(), Some(card(Suit::Hearts, 9)));
    assert_eq!(game.groups[1].hidden, vec![card(Suit::Clubs, 3)]);
}

#[test]
fn reveal_from_empty_group_is_a_block() {
    let mut game = empty_game();
    assert_eq!(game.reveal_from_group(5), RevealOutcome::EmptyGroup);
    assert!(game.current_card().is_none());
}

#[test]
fn reveal_dead_ends_when_last_card_belongs_to_its_own_group() {
    let mut game = empty_game();
    game.groups[4].hidden.push(card(Suit::Spades, 5));

    let outcome = game.reveal_from_group(5);

    assert_eq!(
        outcome,
        RevealOutcome::SameGroupDeadEnd {
            card: card(Suit::Spades, 5),
        }
    );
    // The card stays in flight for display.
    assert_eq!(game.current_card(), Some(card(Suit::Spades, 5)));
    assert!(game.groups[4].hidden.is_empty());
}

#[test]
fn same_group_card_with_cards_left_behind_is_not_a_dead_end() {
    let mut game = empty_game();
    game.groups[4].hidden.push(card(Suit::Spades, 5));
    game.groups[4].hidden.push(card(Suit::Clubs, 9));

    let outcome = game.reveal_from_group(5);

    assert_eq!(
        outcome,
        RevealOutcome::Revealed {
            card: card(Suit::Spades, 5),
            target_group: 5,
        }
    );
}

#[test]
fn place_appends_to_the_target_revealed_pile() {
    let mut game = empty_game();
    game.groups[1].hidden.push(card(Suit::Hearts, 2));
    game.groups[1].hidden.push(card(Suit::Clubs, 9));

    game.reveal_from_group(2);
    let outcome = game.place_current_card();

    assert_eq!(outcome, PlaceOutcome::Placed { target_group: 2 });
    assert!(game.current_card().is_none());
    assert_eq!(game.groups[1].revealed, vec![card(Suit::Hearts, 2)]);
}

#[test]
fn place_reports_win_when_last_hidden_pile_empties() {
    let mut game = empty_game();
    game.groups[2].hidden.push(card(Suit::Clubs, 7));

    game.reveal_from_group(3);
    let outcome = game.place_current_card();

    assert_eq!(outcome, PlaceOutcome::Won { target_group: 7 });
    assert!(game.all_hidden_empty());
    assert_eq!(game.groups[6].revealed, vec![card(Suit::Clubs, 7)]);
}

#[test]
fn can_reveal_requires_cards_and_an_empty_flight_slot() {
    let mut game = empty_game();
    assert!(!game.can_reveal(1));
    assert!(!game.can_reveal(0));
    assert!(!game.can_reveal(14));

    game.groups[0].hidden.push(card(Suit::Diamonds, 8));
    assert!(game.can_reveal(1));

    game.reveal_from_group(1);
    assert!(!game.can_reveal(1));
}

#[test]
fn multiset_survives_reveal_and_place_on_a_real_deal() {
    let mut game = OracleGame::new_with_seed(11);
    assert!(deck_intact(&game));

    game.reveal_from_group(13);
    assert!(deck_intact(&game));

    game.place_current_card();
    assert!(deck_intact(&game));
}

#[test]
fn layout_validation_accepts_a_fresh_deal() {
    let game = OracleGame::from_deck(full_deck());
    let validation = validate_layout(&game);

    assert!(validation.is_valid);
    assert!(validation.errors.is_empty());
    assert!(validation.warnings.is_empty());
}

#[test]
fn layout_validation_flags_overlapping_positions() {
    let mut game = OracleGame::from_deck(full_deck());
    game.groups[0].position = grid_position(2);

    let validation = validate_layout(&game);
    assert!(!validation.is_valid);
    assert!(!validation.errors.is_empty());
}

#[test]
fn layout_validation_flags_positions_off_the_board() {
    let mut game = OracleGame::from_deck(full_deck());
    game.groups[3].position = GridPosition {
        row: 3,
        col: 3,
        span: 2,
    };

    let validation = validate_layout(&game);
    assert!(!validation.is_valid);
}

#[test]
fn layout_validation_warns_when_center_loses_its_span() {
    let mut game = OracleGame::from_deck(full_deck());
    game.groups[12].position.span = 1;

    let validation = validate_layout(&game);
    assert!(validation.is_valid);
    assert!(!validation.warnings.is_empty());
}

proptest! {
    #[test]
    fn multiset_invariant_holds_through_random_play(
        seed in any::<u64>(),
        choices in proptest::collection::vec(1u8..=13, 1..80),
    ) {
        let mut session = GameSession::new();
        session.start_new_game_with_seed(seed);
        session.finish_shuffling().expect("fresh deal enters play");
        let _ = session.reveal_from_group(CENTER_GROUP);
        prop_assert!(deck_intact(session.game()));

        for choice in choices {
            if session.phase() == Phase::Playing && session.game().current_card().is_some() {
                let _ = session.place_current_card();
            } else {
                let _ = session.reveal_from_group(choice);
            }
            prop_assert!(deck_intact(session.game()));
        }
    }
}
