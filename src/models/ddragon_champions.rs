use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::models::errors::ErrorExt;
use crate::Result;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionId(String);

impl ChampionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChampionId {
    fn from(value: String) -> Self {
        ChampionId(value)
    }
}

impl From<&str> for ChampionId {
    fn from(value: &str) -> Self {
        ChampionId(value.to_owned())
    }
}

/// `champion.json`: every champion of a patch, keyed by id.
#[derive(Debug, Deserialize)]
pub struct ChampionData {
    #[serde(default)]
    pub version: String,
    #[serde(deserialize_with = "ordered_entries")]
    #[serde(rename = "data")]
    pub champion_list: Vec<(ChampionId, Champion)>,
}

#[derive(Debug, Deserialize)]
pub struct Champion {
    pub name: String,
    pub title: String,
}

/// `champion/{id}.json`: a single-entry map holding the full champion payload.
#[derive(Debug, Deserialize)]
pub struct ChampionDetailData {
    #[serde(deserialize_with = "ordered_entries")]
    #[serde(rename = "data")]
    pub champions: Vec<(ChampionId, ChampionDetail)>,
}

impl ChampionDetailData {
    pub fn into_champion(self, champion_id: &ChampionId) -> Result<ChampionDetail> {
        self.champions
            .into_iter()
            .find(|(id, _)| id == champion_id)
            .map(|(_, detail)| detail)
            .context(format!("Missing detail data for champion {}", champion_id))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChampionDetail {
    pub image: Image,
    pub passive: Passive,
    pub spells: Vec<Spell>,
    pub skins: Vec<Skin>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Image {
    pub full: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Passive {
    pub name: String,
    pub description: String,
    pub image: Image,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Spell {
    pub name: String,
    pub description: String,
    pub image: Image,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skin {
    pub num: u32,
    pub name: String,
}

// Upstream keeps its champions in a JSON object; read it entry by entry so the
// upstream order survives.
fn ordered_entries<'de, D, K, V>(deserializer: D) -> std::result::Result<Vec<(K, V)>, D::Error>
where
    D: serde::de::Deserializer<'de>,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        type Value = Vec<(K, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map keyed by champion id")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

            while let Some(entry) = access.next_entry()? {
                entries.push(entry);
            }

            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}
