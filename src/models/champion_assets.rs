use log::info;

use crate::endpoints::ddragon::{ArtKind, DDragonEndpoint, ImageCategory};
use crate::models::champion_cache::WarmCache;
use crate::models::champion_record::{IconSet, SkinEntry, Slot, ACTIVE_SLOTS};
use crate::models::ddragon_champions::ChampionId;

// Art files whose name does not match the champion id, keyed by lowercase id.
const ART_FILE_OVERRIDES: &[(&str, &str)] = &[("fiddlesticks", "FiddleSticks")];

fn art_file_id(champion_id: &ChampionId) -> &str {
    let lowercase_id = champion_id.as_str().to_lowercase();

    ART_FILE_OVERRIDES
        .iter()
        .find(|(id, _)| *id == lowercase_id)
        .map(|(_, file_id)| *file_id)
        .unwrap_or_else(|| champion_id.as_str())
}

pub fn resolve_icons(base_url: &str, patch: &str, cache: WarmCache) -> Vec<(ChampionId, IconSet)> {
    let image_url = |category, file_name: &str| {
        DDragonEndpoint::Image(patch, category, file_name).url(base_url)
    };

    cache
        .iter()
        .map(|(champion_id, detail)| {
            let mut abilities = Vec::with_capacity(ACTIVE_SLOTS.len() + 1);

            abilities.push((
                Slot::Passive,
                image_url(ImageCategory::Passive, &detail.passive.image.full),
            ));

            abilities.extend(
                detail
                    .spells
                    .iter()
                    .zip(ACTIVE_SLOTS)
                    .map(|(spell, slot)| (slot, image_url(ImageCategory::Spell, &spell.image.full))),
            );

            info!("Resolved icons for {}.", champion_id);

            let icons = IconSet {
                champion: image_url(ImageCategory::Champion, &detail.image.full),
                abilities,
            };

            (champion_id.clone(), icons)
        })
        .collect()
}

pub fn resolve_skins(base_url: &str, cache: WarmCache) -> Vec<(ChampionId, Vec<SkinEntry>)> {
    cache
        .iter()
        .map(|(champion_id, detail)| {
            let file_id = art_file_id(champion_id);

            let skins = detail
                .skins
                .iter()
                .map(|skin| SkinEntry {
                    name: skin.name.clone(),
                    splash: DDragonEndpoint::ChampionArt(ArtKind::Splash, file_id, skin.num)
                        .url(base_url),
                    loading: DDragonEndpoint::ChampionArt(ArtKind::Loading, file_id, skin.num)
                        .url(base_url),
                })
                .collect();

            info!("Resolved skins for {}.", champion_id);

            (champion_id.clone(), skins)
        })
        .collect()
}
