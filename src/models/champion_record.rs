use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::ddragon_champions::ChampionId;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Slot {
    Passive,
    Q,
    W,
    E,
    R,
}

/// Slots filled, in order, from the upstream spell list.
pub const ACTIVE_SLOTS: [Slot; 4] = [Slot::Q, Slot::W, Slot::E, Slot::R];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChampionSummary {
    pub name: String,
    pub nickname: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

/// Passive first, then whichever of q, w, e, r upstream supplied.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AbilitySet(pub Vec<(Slot, Ability)>);

impl AbilitySet {
    #[allow(unused)]
    pub fn get(&self, slot: Slot) -> Option<&Ability> {
        self.0.iter().find(|(s, _)| *s == slot).map(|(_, a)| a)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconSet {
    pub champion: String,
    pub abilities: Vec<(Slot, String)>,
}

impl IconSet {
    pub fn ability(&self, slot: Slot) -> Option<&str> {
        self.abilities
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, url)| url.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SkinEntry {
    pub name: String,
    pub splash: String,
    pub loading: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AbilityRecord {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChampionRecord {
    #[serde(skip)]
    pub id: ChampionId,
    pub name: String,
    pub nickname: String,
    pub icon: String,
    #[serde(serialize_with = "slot_map")]
    pub abilities: Vec<(Slot, AbilityRecord)>,
    #[serde(serialize_with = "position_map")]
    pub skins: Vec<SkinEntry>,
}

/// One locale's output file: champion id -> record, in catalog order.
#[derive(Debug, Default)]
pub struct ChampionFile(pub Vec<ChampionRecord>);

impl Serialize for ChampionFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|record| (&record.id, record)))
    }
}

fn slot_map<S: Serializer>(
    abilities: &[(Slot, AbilityRecord)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(abilities.len()))?;

    for (slot, ability) in abilities {
        map.serialize_entry(slot, ability)?;
    }

    map.end()
}

// Skins are keyed by their position, not by the upstream skin number.
fn position_map<S: Serializer>(skins: &[SkinEntry], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        skins
            .iter()
            .enumerate()
            .map(|(index, skin)| (index.to_string(), skin)),
    )
}

/// Joins the per-stage results by champion id. Champions missing from any
/// stage are left out; the catalog decides the order.
pub fn merge_records(
    champions: Vec<(ChampionId, ChampionSummary)>,
    abilities: Vec<(ChampionId, AbilitySet)>,
    icons: Vec<(ChampionId, IconSet)>,
    skins: Vec<(ChampionId, Vec<SkinEntry>)>,
) -> ChampionFile {
    let mut abilities = abilities.into_iter().collect::<HashMap<_, _>>();
    let mut icons = icons.into_iter().collect::<HashMap<_, _>>();
    let mut skins = skins.into_iter().collect::<HashMap<_, _>>();

    let records = champions
        .into_iter()
        .filter_map(|(id, summary)| {
            let ability_set = abilities.remove(&id)?;
            let icon_set = icons.remove(&id)?;
            let skin_list = skins.remove(&id)?;

            let abilities = ability_set
                .0
                .into_iter()
                .map(|(slot, ability)| {
                    let record = AbilityRecord {
                        name: ability.name,
                        description: ability.description,
                        icon: icon_set.ability(slot).map(str::to_owned),
                    };

                    (slot, record)
                })
                .collect();

            Some(ChampionRecord {
                id,
                name: summary.name,
                nickname: summary.nickname,
                icon: icon_set.champion,
                abilities,
                skins: skin_list,
            })
        })
        .collect();

    ChampionFile(records)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ability(name: &str) -> Ability {
        Ability {
            name: name.to_owned(),
            description: format!("{} description", name),
        }
    }

    fn sample(id: &str) -> (ChampionSummary, AbilitySet, IconSet, Vec<SkinEntry>) {
        let summary = ChampionSummary {
            name: id.to_owned(),
            nickname: "the Test".to_owned(),
        };

        let abilities = AbilitySet(vec![(Slot::Passive, ability("P")), (Slot::Q, ability("Q"))]);

        let icons = IconSet {
            champion: format!("icon/{}.png", id),
            abilities: vec![
                (Slot::Passive, "icon/p.png".to_owned()),
                (Slot::Q, "icon/q.png".to_owned()),
            ],
        };

        let skins = vec![
            SkinEntry {
                name: "default".to_owned(),
                splash: "splash/0".to_owned(),
                loading: "loading/0".to_owned(),
            },
            SkinEntry {
                name: "Justicar".to_owned(),
                splash: "splash/7".to_owned(),
                loading: "loading/7".to_owned(),
            },
        ];

        (summary, abilities, icons, skins)
    }

    #[test]
    fn merges_only_champions_present_everywhere() {
        let (summary, abilities, icons, skins) = sample("Aatrox");
        let (ahri, _, _, _) = sample("Ahri");

        let file = merge_records(
            vec![("Aatrox".into(), summary), ("Ahri".into(), ahri)],
            vec![("Aatrox".into(), abilities)],
            vec![("Aatrox".into(), icons)],
            vec![("Aatrox".into(), skins)],
        );

        assert_eq!(file.0.len(), 1);
        assert_eq!(file.0[0].id, ChampionId::from("Aatrox"));
        assert_eq!(file.0[0].abilities[1].1.icon.as_deref(), Some("icon/q.png"));
    }

    #[test]
    fn serializes_abilities_by_slot_and_skins_by_position() {
        let (summary, abilities, icons, skins) = sample("Aatrox");

        let file = merge_records(
            vec![("Aatrox".into(), summary)],
            vec![("Aatrox".into(), abilities)],
            vec![("Aatrox".into(), icons)],
            vec![("Aatrox".into(), skins)],
        );

        let value = serde_json::to_value(&file).unwrap();

        assert_eq!(
            value,
            json!({
                "Aatrox": {
                    "name": "Aatrox",
                    "nickname": "the Test",
                    "icon": "icon/Aatrox.png",
                    "abilities": {
                        "passive": { "name": "P", "description": "P description", "icon": "icon/p.png" },
                        "q": { "name": "Q", "description": "Q description", "icon": "icon/q.png" }
                    },
                    "skins": {
                        "0": { "name": "default", "splash": "splash/0", "loading": "loading/0" },
                        "1": { "name": "Justicar", "splash": "splash/7", "loading": "loading/7" }
                    }
                }
            })
        );
    }
}
