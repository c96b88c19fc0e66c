//! Environment configuration for the terminal front end

use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".jotlist-data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `tasks.json` and `notes.json` slots
    pub data_dir: PathBuf,
    /// Keep the task filter between invocations
    pub persist_filter: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("JOTLIST_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Self {
            data_dir,
            persist_filter: env_flag("JOTLIST_PERSIST_FILTER", true),
        }
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        self
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    parse_flag(std::env::var(name).ok().as_deref(), default)
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
