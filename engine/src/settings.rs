use serde::{Deserialize, Serialize};

use crate::types::FirstPlayerMode;

pub const MIN_SEARCH_DEPTH: u8 = 1;
pub const MAX_SEARCH_DEPTH: u8 = 6;
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SessionSettings {
    pub search_depth: u8,
    pub first_player: FirstPlayerMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            first_player: FirstPlayerMode::Random,
        }
    }
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.search_depth < MIN_SEARCH_DEPTH {
            return Err("Search depth must be at least 1".to_string());
        }
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "Search depth ({}) cannot exceed {}, successor copies grow too fast",
                self.search_depth, MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }
}
