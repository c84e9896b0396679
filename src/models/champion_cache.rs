use log::warn;

use crate::models::ddragon_champions::{ChampionDetail, ChampionId};
use crate::models::errors::{ErrorKind, ExtractorError};
use crate::Result;

/// Full detail payloads of one locale's champions, filled while fetching
/// abilities and read back by the icon and skin resolvers.
#[derive(Debug, Default)]
pub struct RawChampionCache {
    entries: Vec<(ChampionId, ChampionDetail)>,
}

impl RawChampionCache {
    pub fn insert(&mut self, champion_id: ChampionId, detail: ChampionDetail) {
        match self.entries.iter_mut().find(|(id, _)| *id == champion_id) {
            Some(entry) => entry.1 = detail,
            None => self.entries.push((champion_id, detail)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn warm(&self, stage: &str) -> Result<WarmCache<'_>> {
        if self.is_empty() {
            warn!("Champion data must be fetched before resolving {}.", stage);

            return Err(ExtractorError::new(
                ErrorKind::Precondition,
                format!("Champion cache is empty, fetch abilities before {}", stage),
            ));
        }

        Ok(WarmCache(&self.entries))
    }
}

/// A cache known to hold at least one champion.
#[derive(Clone, Copy, Debug)]
pub struct WarmCache<'a>(&'a [(ChampionId, ChampionDetail)]);

impl<'a> WarmCache<'a> {
    pub fn iter(self) -> impl Iterator<Item = &'a (ChampionId, ChampionDetail)> {
        self.0.iter()
    }
}
