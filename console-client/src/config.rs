use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use ultimate_ttt_engine::{FirstPlayerMode, SessionSettings};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub search_depth: Option<u8>,
    pub first_player: Option<FirstPlayerMode>,
    pub seed: Option<u64>,
}

impl ClientConfig {
    pub fn from_yaml_file(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to parse config file {}: {}", path, e)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(format!("Failed to read config file {}: {}", path, err)),
        }
    }

    pub fn to_settings(self) -> SessionSettings {
        let defaults = SessionSettings::default();
        SessionSettings {
            search_depth: self.search_depth.unwrap_or(defaults.search_depth),
            first_player: self.first_player.unwrap_or(defaults.first_player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ClientConfig::from_yaml_file("does_not_exist.yaml").unwrap();
        let settings = config.to_settings();
        assert_eq!(settings.search_depth, 2);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config: ClientConfig = serde_yaml_ng::from_str("search_depth: 3\n").unwrap();
        let settings = config.to_settings();
        assert_eq!(settings.search_depth, 3);
        assert!(matches!(settings.first_player, FirstPlayerMode::Random));
    }
}
