use std::collections::HashMap;
use std::path::PathBuf;

use log::info;

use crate::config::Config;
use crate::models::champion_assets::{resolve_icons, resolve_skins};
use crate::models::champion_cache::RawChampionCache;
use crate::models::champion_record::{merge_records, ChampionFile};
use crate::models::ddragon_client::Fetch;
use crate::models::json_file;
use crate::models::league_api::LeagueApi;
use crate::models::locale::{self, LocaleEntry, LocaleFile};
use crate::Result;

/// Drives a full extraction against the latest patch.
///
/// Output files are only ever created, never refreshed: an existing
/// `languages.json` or `{country}_data.json` is left alone. The existence
/// check and the write are separate steps, so two runs must not share a data
/// directory at the same time.
#[derive(Debug)]
pub struct Extractor<F> {
    api: LeagueApi<F>,
    config: Config,
    patch: String,
}

impl<F: Fetch> Extractor<F> {
    pub async fn new(api: LeagueApi<F>, config: Config) -> Result<Self> {
        let patch = api.latest_version().await?;

        info!("Latest patch: {}", patch);

        Ok(Extractor { api, config, patch })
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Path of `languages.json`, downloading the locale list only if the file
    /// is missing.
    pub async fn export_locale_file(&self) -> Result<PathBuf> {
        let path = self.config.languages_path();

        if path.exists() {
            info!("Locale file already exists at {}.", path.display());

            return Ok(path);
        }

        let locale_file = LocaleFile::new(self.api.list_locales().await?);

        info!("Creating locale file with {} countries...", locale_file.len());

        json_file::write_json_pretty(&path, &locale_file).await?;

        info!("Created locale file at {}.", path.display());

        Ok(path)
    }

    pub async fn export_champion_data(&self, countries: &[&str]) -> Result<()> {
        let languages_path = self.export_locale_file().await?;

        info!("Loading locale file...");

        let locales = json_file::read_json::<HashMap<String, LocaleEntry>>(&languages_path)
            .await?
            .into_values()
            .collect::<Vec<_>>();

        let champion_dir = self.config.champion_dir();

        for country in countries {
            let entry = locale::find_locale(&locales, country)?;

            let path = champion_dir.join(format!("{}_data.json", entry.file_stem()));

            if path.exists() {
                info!(
                    "Champion data for {} already exists at {}, skipping.",
                    entry.language,
                    path.display()
                );

                continue;
            }

            info!("Downloading champion data... ({})", entry.language);

            let champion_file = self.extract_locale(&entry.code).await?;

            info!(
                "Writing {} champions... ({})",
                champion_file.0.len(),
                entry.language
            );

            json_file::write_json_pretty(&path, &champion_file).await?;

            info!("Created {}. ({})", path.display(), entry.language);
        }

        Ok(())
    }

    async fn extract_locale(&self, locale_code: &str) -> Result<ChampionFile> {
        let champions = self.api.list_champions(&self.patch, locale_code).await?;

        let mut cache = RawChampionCache::default();

        let abilities = self
            .api
            .fetch_abilities(&self.patch, locale_code, &mut cache)
            .await?;

        let icons = resolve_icons(self.api.base_url(), &self.patch, cache.warm("icons")?);
        let skins = resolve_skins(self.api.base_url(), cache.warm("skins")?);

        Ok(merge_records(champions, abilities, icons, skins))
    }
}
