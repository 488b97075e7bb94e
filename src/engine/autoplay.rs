//! Reveal-group selection for unattended play.
//!
//! Scores every group that still has hidden cards and picks the best one.
//! Advisory only: the session never consults this to validate a manual
//! reveal. The small random jitter comes through `JitterSource` so tests
//! can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::stats;
use crate::game::{OracleGame, GROUP_COUNT};

const HIDDEN_COUNT_WEIGHT: f64 = 10.0;
const REVEAL_RATIO_WEIGHT: f64 = 5.0;
const DUPLICATE_RANK_CUTOFF: usize = 2;
const DUPLICATE_RANK_PENALTY: f64 = 8.0;
const FREQUENT_VALUE_BONUS: f64 = 15.0;
const FREQUENT_VALUE_COUNT: usize = 3;
const FREQUENT_PHASE_THRESHOLD: u8 = 40;
const EARLY_GAME_THRESHOLD: u8 = 30;
const EARLY_GAME_HIDDEN_WEIGHT: f64 = 3.0;
const LATE_GAME_THRESHOLD: u8 = 70;
const LATE_GAME_BALANCE_TARGET: f64 = 4.0;
const LATE_GAME_BALANCE_BASE: f64 = 15.0;
const LATE_GAME_BALANCE_WEIGHT: f64 = 3.0;
const JITTER_SPAN: f64 = 5.0;

/// Source of the scoring jitter, uniform in [-5, +5).
pub trait JitterSource {
    fn jitter(&mut self) -> f64;
}

pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self::with_seed(rng.gen())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn jitter(&mut self) -> f64 {
        self.rng.gen_range(-JITTER_SPAN..JITTER_SPAN)
    }
}

/// Jitter pinned to zero; makes the scoring fully deterministic.
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&mut self) -> f64 {
        0.0
    }
}

/// Best group to reveal from next, or `None` when every hidden pile is
/// empty (the signal to stop unattended play). Ties keep the lowest
/// group number.
pub fn select_next_reveal_group(
    game: &OracleGame,
    jitter: &mut dyn JitterSource,
) -> Option<u8> {
    let completion = stats::completion_percent(game);
    let frequent = most_frequent_revealed_values(game);

    let mut best: Option<(u8, i64)> = None;
    for (group_no, group) in game.groups() {
        if group.hidden_is_empty() {
            continue;
        }
        let score =
            score_reveal_candidate(game, group_no, completion, &frequent, jitter.jitter());
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((group_no, score)),
        }
    }

    best.map(|(group_no, _)| group_no)
}

/// Scores one candidate group. `completion` is the overall completion
/// percent and `frequent` the most frequent revealed values, both passed
/// in so a whole selection round shares a single snapshot of them.
pub fn score_reveal_candidate(
    game: &OracleGame,
    group_no: u8,
    completion: u8,
    frequent: &[u8],
    jitter: f64,
) -> i64 {
    let Some(group) = game.group(group_no) else {
        return 0;
    };
    let hidden = group.hidden_len() as f64;
    let revealed = group.revealed().len() as f64;

    let mut score = hidden * HIDDEN_COUNT_WEIGHT;

    // Groups rich in hidden cards relative to what they already took are
    // the cheapest sources of fresh information.
    let reveal_ratio = if revealed > 0.0 {
        hidden / revealed
    } else {
        hidden * 2.0
    };
    score += reveal_ratio * REVEAL_RATIO_WEIGHT;

    let max_duplicates = max_duplicate_rank_count(game, group_no);
    if max_duplicates > DUPLICATE_RANK_CUTOFF {
        score -= max_duplicates as f64 * DUPLICATE_RANK_PENALTY;
    }

    if completion > FREQUENT_PHASE_THRESHOLD && frequent.contains(&group_no) {
        score += FREQUENT_VALUE_BONUS;
    }

    if completion < EARLY_GAME_THRESHOLD {
        // Early game: explore the big groups.
        score += hidden * EARLY_GAME_HIDDEN_WEIGHT;
    } else if completion > LATE_GAME_THRESHOLD {
        // Late game: favor groups near their 4-card balance point.
        let balance = LATE_GAME_BALANCE_BASE - (revealed - LATE_GAME_BALANCE_TARGET).abs();
        if balance > 0.0 {
            score += balance * LATE_GAME_BALANCE_WEIGHT;
        }
    }

    score += jitter;
    score.round() as i64
}

/// Largest number of same-rank cards already sitting in the group's
/// revealed pile.
pub fn max_duplicate_rank_count(game: &OracleGame, group_no: u8) -> usize {
    let Some(group) = game.group(group_no) else {
        return 0;
    };
    let mut counts = [0_usize; GROUP_COUNT as usize];
    for card in group.revealed() {
        counts[usize::from(card.numeric_value() - 1)] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

/// The three most frequent numeric values across every revealed pile,
/// highest count first; count ties keep the lower value.
pub fn most_frequent_revealed_values(game: &OracleGame) -> Vec<u8> {
    let mut counts = [0_usize; GROUP_COUNT as usize];
    for (_, group) in game.groups() {
        for card in group.revealed() {
            counts[usize::from(card.numeric_value() - 1)] += 1;
        }
    }

    let mut values: Vec<u8> = (1..=GROUP_COUNT)
        .filter(|value| counts[usize::from(value - 1)] > 0)
        .collect();
    values.sort_by(|a, b| {
        counts[usize::from(b - 1)]
            .cmp(&counts[usize::from(a - 1)])
            .then(a.cmp(b))
    });
    values.truncate(FREQUENT_VALUE_COUNT);
    values
}
