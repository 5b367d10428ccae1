//! Level persistence through [`eframe::Storage`].
//!
//! Only the level is stored; the puzzle itself is regenerated on startup.

use eframe::Storage;
use hueswap_game::Level;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

const LEVEL_KEY: &str = "hueswap-level";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedLevel {
    level: u32,
}

/// Loads the stored level.
///
/// Returns `None` when nothing is stored. An unreadable or out-of-range value is
/// logged and also yields `None`, so the caller falls back to the default level.
#[must_use]
pub fn load_level(storage: &dyn Storage) -> Option<Level> {
    let raw = storage.get_string(LEVEL_KEY)?;
    let Some(persisted) = eframe::get_value::<PersistedLevel>(storage, LEVEL_KEY) else {
        log::warn!("ignoring unreadable stored level: {raw:?}");
        return None;
    };
    match Level::new(persisted.level) {
        Ok(level) => Some(level),
        Err(e) => {
            log::warn!("ignoring stored level: {e}");
            None
        }
    }
}

/// Stores `level`.
pub fn save_level(storage: &mut dyn Storage, level: Level) {
    eframe::set_value(
        storage,
        LEVEL_KEY,
        &PersistedLevel {
            level: level.value(),
        },
    );
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    save_level(storage, app_state.level);
    log::debug!("saved level {}", app_state.level);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use eframe::Storage;
    use hueswap_game::Level;

    use super::{LEVEL_KEY, PersistedLevel, load_level, save_level};

    #[derive(Debug, Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn missing_level_loads_nothing() {
        let storage = MemoryStorage::default();
        assert_eq!(load_level(&storage), None);
    }

    #[test]
    fn saved_level_loads_back() {
        let mut storage = MemoryStorage::default();
        let level = Level::new(6).unwrap();
        save_level(&mut storage, level);
        assert_eq!(load_level(&storage), Some(level));
    }

    #[test]
    fn corrupt_level_is_ignored() {
        let mut storage = MemoryStorage::default();
        storage.set_string(LEVEL_KEY, "not a level".to_owned());
        assert_eq!(load_level(&storage), None);
    }

    #[test]
    fn out_of_range_level_is_ignored() {
        let mut storage = MemoryStorage::default();
        for level in [0, 1, 1000] {
            eframe::set_value(&mut storage, LEVEL_KEY, &PersistedLevel { level });
            assert_eq!(load_level(&storage), None);
        }
    }
}
