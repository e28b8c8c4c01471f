use std::{env, path::PathBuf};

pub const DEFAULT_STATE_KEY: &str = "campus-swipe-state-v1";

/// Where a session finds its data and keeps its state.
///
/// Every field can be overridden through a `CAMPUS_SWIPE_*` environment
/// variable, see [`Config::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the reaction snapshot is written to.
    pub data_dir: PathBuf,
    /// Key the snapshot is stored under.
    pub state_key: String,
    pub catalog_path: PathBuf,
    pub friends_path: PathBuf,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".campus-swipe"),
            state_key: String::from(DEFAULT_STATE_KEY),
            catalog_path: PathBuf::from("data/catalog.ron"),
            friends_path: PathBuf::from("data/friends.ron"),
        }
    }
}
impl Config {
    /// Reads `CAMPUS_SWIPE_DIR`, `CAMPUS_SWIPE_STATE_KEY`,
    /// `CAMPUS_SWIPE_CATALOG` and `CAMPUS_SWIPE_FRIENDS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            data_dir: value("CAMPUS_SWIPE_DIR").map_or(defaults.data_dir, PathBuf::from),
            state_key: value("CAMPUS_SWIPE_STATE_KEY").unwrap_or(defaults.state_key),
            catalog_path: value("CAMPUS_SWIPE_CATALOG").map_or(defaults.catalog_path, PathBuf::from),
            friends_path: value("CAMPUS_SWIPE_FRIENDS").map_or(defaults.friends_path, PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_keep_defaults() {
        let config = Config::from_lookup(|name| match name {
            "CAMPUS_SWIPE_DIR" => Some(String::from("/tmp/swipe")),
            "CAMPUS_SWIPE_STATE_KEY" => Some(String::from("  ")),
            _ => None,
        });
        assert_eq!(config.data_dir, PathBuf::from("/tmp/swipe"));
        assert_eq!(config.state_key, DEFAULT_STATE_KEY);
        assert_eq!(config.catalog_path, Config::default().catalog_path);
    }
}
