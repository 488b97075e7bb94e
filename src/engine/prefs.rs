//! User preference handling.
//!
//! The engine never reads storage itself: the embedder supplies a
//! `PreferencesStore` (browser localStorage, a settings file, an
//! in-memory map in tests) and the load/save helpers deal with the
//! legacy key aliases left behind by earlier releases.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const MODE_KEY: &str = "gameMode";
pub const LEGACY_MODE_KEY: &str = "oracle-game-mode";
pub const SPEED_KEY: &str = "gameSpeed";
pub const LEGACY_SPEED_KEY: &str = "oracle-game-speed";

pub const DEFAULT_SPEED_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    Manual,
    Automatic,
}

impl PlayMode {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "manual" => Some(Self::Manual),
            "automatic" => Some(Self::Automatic),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
        }
    }
}

/// The two preferences that outlive a session: how the game is driven
/// and the pacing hint for the driving layer's timers. The engine treats
/// `speed_ms` as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub mode: PlayMode,
    pub speed_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::Manual,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    pub mode: Option<PlayMode>,
    pub speed_ms: Option<u32>,
}

pub trait PreferencesStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Reads the standard keys first, falling back to the legacy aliases,
/// then to defaults. Unparseable values fall back to defaults too.
pub fn load_config(store: &dyn PreferencesStore) -> EngineConfig {
    let mode = store
        .get(MODE_KEY)
        .or_else(|| store.get(LEGACY_MODE_KEY))
        .and_then(|id| PlayMode::from_id(&id))
        .unwrap_or(PlayMode::Manual);
    let speed_ms = store
        .get(SPEED_KEY)
        .or_else(|| store.get(LEGACY_SPEED_KEY))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_SPEED_MS);
    EngineConfig { mode, speed_ms }
}

/// Writes every preference under both its standard and legacy key so
/// older builds reading only the legacy alias stay in sync.
pub fn save_config(store: &mut dyn PreferencesStore, config: EngineConfig) {
    store.set(MODE_KEY, config.mode.id());
    store.set(LEGACY_MODE_KEY, config.mode.id());
    let speed = config.speed_ms.to_string();
    store.set(SPEED_KEY, &speed);
    store.set(LEGACY_SPEED_KEY, &speed);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
