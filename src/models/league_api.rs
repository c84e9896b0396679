use log::info;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::endpoints::ddragon::DDragonEndpoint;
use crate::models::champion_cache::RawChampionCache;
use crate::models::champion_record::{Ability, AbilitySet, ChampionSummary, Slot, ACTIVE_SLOTS};
use crate::models::ddragon_champions::{ChampionData, ChampionDetailData, ChampionId};
use crate::models::ddragon_client::Fetch;
use crate::models::errors::ErrorExt;
use crate::models::locale::{self, LocaleEntry};
use crate::util::strip_html;
use crate::Result;

/// Data Dragon and the Riot documentation, read through a [`Fetch`].
#[derive(Debug)]
pub struct LeagueApi<F> {
    fetcher: F,
    base_url: String,
    languages_url: String,
}

impl<F: Fetch> LeagueApi<F> {
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            base_url: config.base_url.clone(),
            languages_url: config.languages_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every published patch, newest first.
    pub async fn versions(&self) -> Result<Vec<String>> {
        let versions: Vec<String> = self.call_endpoint(&DDragonEndpoint::Version).await?;

        info!("Downloaded {} versions.", versions.len());

        Ok(versions)
    }

    pub async fn latest_version(&self) -> Result<String> {
        self.versions()
            .await?
            .into_iter()
            .next()
            .context("Missing version data from DDragon.")
    }

    pub async fn list_locales(&self) -> Result<Vec<LocaleEntry>> {
        let page = self.fetcher.get_text(&self.languages_url).await?;

        let locales = locale::parse_locale_table(&page)?;

        info!("Downloaded {} locales.", locales.len());

        Ok(locales)
    }

    #[allow(unused)]
    pub async fn find_locale(&self, country: &str) -> Result<LocaleEntry> {
        let locales = self.list_locales().await?;

        locale::find_locale(&locales, country).cloned()
    }

    pub async fn list_champions(
        &self,
        patch: &str,
        locale: &str,
    ) -> Result<Vec<(ChampionId, ChampionSummary)>> {
        let data: ChampionData = self
            .call_endpoint(&DDragonEndpoint::ChampionData(patch, locale))
            .await?;

        info!(
            "Downloaded {} champion names for {} ({}).",
            data.champion_list.len(),
            locale,
            data.version
        );

        let champions = data
            .champion_list
            .into_iter()
            .map(|(id, champion)| {
                let summary = ChampionSummary {
                    name: champion.name,
                    nickname: champion.title,
                };

                (id, summary)
            })
            .collect();

        Ok(champions)
    }

    /// Fetches every champion's detail payload in catalog order, keeping the
    /// payloads in `cache` for icon and skin resolution.
    pub async fn fetch_abilities(
        &self,
        patch: &str,
        locale: &str,
        cache: &mut RawChampionCache,
    ) -> Result<Vec<(ChampionId, AbilitySet)>> {
        let champion_ids = self
            .list_champions(patch, locale)
            .await?
            .into_iter()
            .map(|(id, _)| id);

        info!("Downloading abilities...");

        let mut champion_abilities = Vec::new();

        for champion_id in champion_ids {
            let data: ChampionDetailData = self
                .call_endpoint(&DDragonEndpoint::ChampionDetail(
                    patch,
                    locale,
                    champion_id.as_str(),
                ))
                .await?;

            let detail = data.into_champion(&champion_id)?;

            let mut abilities = Vec::with_capacity(ACTIVE_SLOTS.len() + 1);

            abilities.push((
                Slot::Passive,
                Ability {
                    name: detail.passive.name.clone(),
                    description: strip_html(&detail.passive.description),
                },
            ));

            abilities.extend(detail.spells.iter().zip(ACTIVE_SLOTS).map(|(spell, slot)| {
                let ability = Ability {
                    name: spell.name.clone(),
                    description: strip_html(&spell.description),
                };

                (slot, ability)
            }));

            cache.insert(champion_id.clone(), detail);

            info!("Downloaded abilities of {}.", champion_id);

            champion_abilities.push((champion_id, AbilitySet(abilities)));
        }

        info!("Downloaded abilities of {} champions.", cache.len());

        Ok(champion_abilities)
    }

    async fn call_endpoint<T: DeserializeOwned>(
        &self,
        endpoint: &DDragonEndpoint<'_>,
    ) -> Result<T> {
        let res = self.fetcher.get_json(&endpoint.url(&self.base_url)).await?;

        Ok(serde_json::from_value::<T>(res)?)
    }
}

#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::models::champion_cache::fixtures::detail_json;
    use crate::models::ddragon_client::stub::StubFetch;

    pub const BASE: &str = "http://stub";
    pub const LANGUAGES: &str = "http://stub/docs/lol";

    pub fn config() -> crate::config::Config {
        crate::config::Config {
            base_url: BASE.to_owned(),
            languages_url: LANGUAGES.to_owned(),
            ..crate::config::Config::default()
        }
    }

    /// Upstream with a single patch and the given champions for `locale`.
    pub fn upstream(patch: &str, locale: &str, champions: &[(&str, &str, &str)]) -> StubFetch {
        let mut index = serde_json::Map::new();

        for (id, name, title) in champions {
            index.insert(
                id.to_string(),
                json!({ "id": id, "key": "266", "name": name, "title": title }),
            );
        }

        let mut stub = StubFetch::default()
            .with_json(
                format!("{}/api/versions.json", BASE),
                json!([patch, "13.24.1"]),
            )
            .with(LANGUAGES, crate::models::locale::fixtures::LANGUAGES_PAGE)
            .with_json(
                format!("{}/cdn/{}/data/{}/champion.json", BASE, patch, locale),
                json!({ "type": "champion", "version": patch, "data": index }),
            );

        for (id, _, _) in champions {
            stub = stub.with_json(
                format!("{}/cdn/{}/data/{}/champion/{}.json", BASE, patch, locale, id),
                json!({ "data": { *id: detail_json(id, &[(0, "default")]) } }),
            );
        }

        stub
    }
}
