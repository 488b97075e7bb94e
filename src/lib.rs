/* lib.rs
 *
 * Copyright 2026 emviolet
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

//! Game-state engine for Oracle of Luck: a 52-card deck dealt into
//! thirteen groups, played by revealing each group's top card and
//! relaying it to the group matching its rank. The crate owns deck
//! construction, the riffle shuffle, the reveal/place state machine,
//! win/loss detection, and the unattended-play heuristic. Rendering,
//! animation, pacing, and storage belong to the embedding UI layer.

pub mod engine;
pub mod game;

pub use engine::errors::{EngineError, InvalidMove, ProtocolError};
pub use engine::prefs::{ConfigUpdate, EngineConfig, PlayMode, PreferencesStore};
pub use engine::results::{
    ClickOutcome, GroupView, HintReport, PlaceResult, RevealResult, SessionSnapshot,
};
pub use engine::session::{GameSession, MoveAction, MoveRecord, Phase};
pub use game::{Card, OracleGame, Suit};
