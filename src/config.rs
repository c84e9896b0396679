use std::path::PathBuf;
use std::time::Duration;

use crate::endpoints::ddragon::DDRAGON_URL;

pub const LANGUAGES_URL: &str = "https://developer.riotgames.com/docs/lol#data-dragon_languages";
pub const BASE_URL_VAR: &str = "DDRAGON_BASE_URL";

const DATA_DIR: &str = "scripting/data";
const LOG_DIR: &str = "scripting/logs";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub languages_url: String,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DDRAGON_URL.to_owned(),
            languages_url: LANGUAGES_URL.to_owned(),
            data_dir: PathBuf::from(DATA_DIR),
            log_dir: PathBuf::from(LOG_DIR),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Defaults, with the upstream base url optionally taken from `DDRAGON_BASE_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim().to_owned();
            }
        }

        config
    }

    pub fn languages_path(&self) -> PathBuf {
        self.data_dir.join("languages.json")
    }

    pub fn champion_dir(&self) -> PathBuf {
        self.data_dir.join("champ")
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join("extracting_data.log")
    }
}
