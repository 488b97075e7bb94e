//! The game session: phase machine, move history, and the operation
//! surface the driving layer calls. Everything is synchronous; pacing,
//! animation, and persistence belong to the embedder.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::engine::autoplay::{self, JitterSource, RandomJitter};
use crate::engine::errors::{EngineError, InvalidMove, ProtocolError};
use crate::engine::hints;
use crate::engine::layout::{self, LayoutValidation};
use crate::engine::messages;
use crate::engine::prefs::{ConfigUpdate, EngineConfig, PlayMode};
use crate::engine::results::{
    group_views, ClickOutcome, HintReport, PlaceResult, RevealResult, SessionSnapshot,
};
use crate::engine::stats::{self, BoardStats};
use crate::game::{
    Card, OracleGame, PlaceOutcome, RevealOutcome, CENTER_GROUP, GROUP_COUNT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menu,
    Shuffling,
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveAction {
    Reveal,
    Place,
}

/// Append-only audit entry; feeds the statistics views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub card: Card,
    pub from_group: u8,
    pub to_group: u8,
    pub action: MoveAction,
    pub at: SystemTime,
}

/// One player's game. Owns all mutable state; create as many sessions as
/// you like, nothing is process-wide.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    game: OracleGame,
    history: Vec<MoveRecord>,
    /// Origin group of the card currently in flight.
    in_flight_from: Option<u8>,
    config: EngineConfig,
}

impl GameSession {
    /// Fresh Menu-phase session with default preferences.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Fresh Menu-phase session with preferences the embedder loaded.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            phase: Phase::Menu,
            game: OracleGame::empty(),
            history: Vec::new(),
            in_flight_from: None,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &OracleGame {
        &self.game
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn mode(&self) -> PlayMode {
        self.config.mode
    }

    pub fn speed_ms(&self) -> u32 {
        self.config.speed_ms
    }

    /// Builds, shuffles, and deals a fresh deck, discarding any prior
    /// session state except the user preferences. Legal from any phase.
    pub fn start_new_game(&mut self) -> SessionSnapshot {
        self.start_new_game_with_seed(rand::random())
    }

    pub fn start_new_game_with_seed(&mut self, seed: u64) -> SessionSnapshot {
        info!(seed, "starting a new game");
        self.install_deal(OracleGame::new_with_seed(seed))
    }

    /// Deals a caller-prepared 52-card deck instead of shuffling one.
    pub fn start_new_game_with_deck(&mut self, deck: Vec<Card>) -> SessionSnapshot {
        info!("starting a new game from a prepared deck");
        self.install_deal(OracleGame::from_deck(deck))
    }

    fn install_deal(&mut self, game: OracleGame) -> SessionSnapshot {
        self.game = game;
        self.history.clear();
        self.in_flight_from = None;
        self.phase = Phase::Shuffling;
        self.snapshot_with_message(messages::msg_shuffling())
    }

    /// Ends the shuffle presentation and opens play.
    pub fn finish_shuffling(&mut self) -> Result<SessionSnapshot, EngineError> {
        self.require_phase(Phase::Shuffling)?;
        self.phase = Phase::Playing;
        info!("shuffle finished, play begins");
        Ok(self.snapshot_with_message(messages::msg_game_start()))
    }

    /// Pops the front card of `group_no` into flight.
    ///
    /// Game-ending conditions (empty group, same-group dead end) come
    /// back as ordinary unsuccessful results with `phase == Lost`; only
    /// sequencing violations are errors.
    pub fn reveal_from_group(&mut self, group_no: u8) -> Result<RevealResult, EngineError> {
        self.require_phase(Phase::Playing)?;
        if !(1..=GROUP_COUNT).contains(&group_no) {
            return Err(ProtocolError::UnknownGroup(group_no).into());
        }
        if self.game.current_card().is_some() {
            return Err(ProtocolError::CardAlreadyInFlight.into());
        }
        if self.history.is_empty() && group_no != CENTER_GROUP {
            return Err(ProtocolError::OpeningRevealNotCenter.into());
        }

        match self.game.reveal_from_group(group_no) {
            RevealOutcome::EmptyGroup => {
                self.phase = Phase::Lost;
                warn!(group = group_no, "reveal from an empty group, game lost");
                Ok(RevealResult {
                    success: false,
                    phase: self.phase,
                    current_card: None,
                    target_group: None,
                    groups: group_views(&self.game),
                    message: messages::msg_block_defeat(),
                })
            }
            RevealOutcome::SameGroupDeadEnd { card } => {
                self.record_move(card, group_no, card.numeric_value(), MoveAction::Reveal);
                self.in_flight_from = Some(group_no);
                self.phase = Phase::Lost;
                warn!(
                    group = group_no,
                    card = %card.label(),
                    "revealed card dead-ends in its own group, game lost"
                );
                Ok(RevealResult {
                    success: false,
                    phase: self.phase,
                    current_card: Some(card),
                    target_group: Some(card.numeric_value()),
                    groups: group_views(&self.game),
                    message: messages::msg_same_group_defeat(card, group_no),
                })
            }
            RevealOutcome::Revealed { card, target_group } => {
                self.record_move(card, group_no, target_group, MoveAction::Reveal);
                self.in_flight_from = Some(group_no);
                debug!(
                    group = group_no,
                    card = %card.label(),
                    target = target_group,
                    "card revealed"
                );
                Ok(RevealResult {
                    success: true,
                    phase: self.phase,
                    current_card: Some(card),
                    target_group: Some(target_group),
                    groups: group_views(&self.game),
                    message: messages::msg_card_revealed(card, target_group),
                })
            }
        }
    }

    /// Moves the in-flight card onto its destination group and reports
    /// victory when that emptied the last hidden pile. The caller reads
    /// `target_group` to continue the turn from the receiving group.
    pub fn place_current_card(&mut self) -> Result<PlaceResult, EngineError> {
        self.require_phase(Phase::Playing)?;
        let Some(card) = self.game.current_card() else {
            return Err(InvalidMove::NoCardInFlight.into());
        };

        let from_group = self.in_flight_from.unwrap_or(card.numeric_value());
        let outcome = self.game.place_current_card();
        self.in_flight_from = None;

        match outcome {
            PlaceOutcome::Won { target_group } => {
                self.record_move(card, from_group, target_group, MoveAction::Place);
                self.phase = Phase::Won;
                info!(moves = self.history.len(), "every hidden pile empty, game won");
                Ok(PlaceResult {
                    success: true,
                    is_victory: true,
                    phase: self.phase,
                    target_group: Some(target_group),
                    groups: group_views(&self.game),
                    message: messages::msg_victory(),
                })
            }
            PlaceOutcome::Placed { target_group } => {
                self.record_move(card, from_group, target_group, MoveAction::Place);
                debug!(card = %card.label(), target = target_group, "card placed");
                let continuation = if self
                    .game
                    .group(target_group)
                    .map(|group| !group.hidden_is_empty())
                    .unwrap_or(false)
                {
                    messages::msg_next_turn(target_group)
                } else {
                    messages::msg_target_group_empty(target_group)
                };
                Ok(PlaceResult {
                    success: true,
                    is_victory: false,
                    phase: self.phase,
                    target_group: Some(target_group),
                    groups: group_views(&self.game),
                    message: format!(
                        "{} {}",
                        messages::msg_card_placed(target_group),
                        continuation
                    ),
                })
            }
        }
    }

    /// Gate for manual clicks: exactly the calls `reveal_from_group`
    /// would accept right now.
    pub fn can_reveal(&self, group_no: u8) -> bool {
        self.phase == Phase::Playing
            && !(self.history.is_empty() && group_no != CENTER_GROUP)
            && self.game.can_reveal(group_no)
    }

    /// Whether unattended play should keep going.
    pub fn can_continue(&self) -> bool {
        self.phase == Phase::Playing && self.game.has_hidden_cards()
    }

    /// Manual-mode click handling: reveals from the clicked group, or
    /// places the in-flight card when its destination is clicked. Clicks
    /// the rules merely disallow (wrong destination, locked group) are
    /// rejected without touching state or ending the game.
    pub fn click_group(&mut self, group_no: u8) -> Result<ClickOutcome, EngineError> {
        if self.config.mode != PlayMode::Manual || self.phase != Phase::Playing {
            return Ok(ClickOutcome::Rejected {
                message: messages::msg_action_not_allowed(),
            });
        }

        if let Some(card) = self.game.current_card() {
            let target_group = card.numeric_value();
            if group_no != target_group {
                return Ok(ClickOutcome::Rejected {
                    message: messages::msg_place_required(card, target_group),
                });
            }
            return self.place_current_card().map(ClickOutcome::Placed);
        }

        if !self.can_reveal(group_no) {
            return Ok(ClickOutcome::Rejected {
                message: messages::msg_group_not_clickable(),
            });
        }

        self.reveal_from_group(group_no).map(ClickOutcome::Revealed)
    }

    /// Returns to the menu, discarding the table and history but keeping
    /// the user preferences.
    pub fn reset_to_menu(&mut self) -> SessionSnapshot {
        info!("session reset to menu");
        self.phase = Phase::Menu;
        self.game = OracleGame::empty();
        self.history.clear();
        self.in_flight_from = None;
        self.snapshot_with_message(messages::msg_welcome_back())
    }

    /// Applies a preference update and returns the resulting config. The
    /// embedder persists it through its `PreferencesStore`.
    pub fn update_config(&mut self, update: ConfigUpdate) -> EngineConfig {
        if let Some(mode) = update.mode {
            self.config.mode = mode;
        }
        if let Some(speed_ms) = update.speed_ms {
            self.config.speed_ms = speed_ms;
        }
        debug!(mode = self.config.mode.id(), speed_ms = self.config.speed_ms, "config updated");
        self.config
    }

    /// Suggested next reveal plus advisory notes. Random jitter inside;
    /// use `hint_with` to pin it.
    pub fn hint(&self) -> HintReport {
        self.hint_with(&mut RandomJitter::new())
    }

    pub fn hint_with(&self, jitter: &mut dyn JitterSource) -> HintReport {
        let suggested_group = if self.phase == Phase::Playing
            && self.game.current_card().is_none()
        {
            if self.history.is_empty() {
                // Only the center is revealable on the opening move.
                Some(CENTER_GROUP).filter(|&group_no| self.game.can_reveal(group_no))
            } else {
                autoplay::select_next_reveal_group(&self.game, jitter)
            }
        } else {
            None
        };
        HintReport {
            suggested_group,
            advisories: hints::movement_hints(self),
        }
    }

    pub fn statistics(&self) -> BoardStats {
        stats::board_stats(&self.game)
    }

    pub fn validate_layout(&self) -> LayoutValidation {
        layout::validate_layout(&self.game)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let message = match self.phase {
            Phase::Menu => messages::msg_welcome(),
            Phase::Shuffling => messages::msg_shuffling(),
            Phase::Playing => messages::msg_game_start(),
            Phase::Won => messages::msg_victory(),
            Phase::Lost => messages::msg_block_defeat(),
        };
        self.snapshot_with_message(message)
    }

    fn snapshot_with_message(&self, message: String) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            groups: group_views(&self.game),
            current_card: self.game.current_card(),
            mode: self.config.mode,
            speed_ms: self.config.speed_ms,
            move_count: self.history.len(),
            message,
        }
    }

    fn record_move(&mut self, card: Card, from_group: u8, to_group: u8, action: MoveAction) {
        self.history.push(MoveRecord {
            card,
            from_group,
            to_group,
            action,
            at: SystemTime::now(),
        });
    }

    fn require_phase(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ProtocolError::PhaseMismatch {
                expected,
                actual: self.phase,
            }
            .into())
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
