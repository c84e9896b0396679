pub const DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ImageCategory {
    Champion,
    Passive,
    Spell,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ArtKind {
    Splash,
    Loading,
}

pub enum DDragonEndpoint<'a> {
    Version,
    ChampionData(&'a str, &'a str),
    ChampionDetail(&'a str, &'a str, &'a str),
    Image(&'a str, ImageCategory, &'a str),
    ChampionArt(ArtKind, &'a str, u32),
}

impl DDragonEndpoint<'_> {
    pub fn url(&self, base_url: &str) -> String {
        let base_url = base_url.trim_end_matches('/');

        match self {
            DDragonEndpoint::Version => format!("{}/api/versions.json", base_url),
            DDragonEndpoint::ChampionData(version, locale) => {
                format!("{}/cdn/{}/data/{}/champion.json", base_url, version, locale)
            }
            DDragonEndpoint::ChampionDetail(version, locale, champion_id) => {
                format!(
                    "{}/cdn/{}/data/{}/champion/{}.json",
                    base_url, version, locale, champion_id
                )
            }
            DDragonEndpoint::Image(version, category, file_name) => {
                format!("{}/cdn/{}/img/{}/{}", base_url, version, category, file_name)
            }
            DDragonEndpoint::ChampionArt(kind, file_id, skin_num) => {
                format!(
                    "{}/cdn/img/champion/{}/{}_{}.jpg",
                    base_url, kind, file_id, skin_num
                )
            }
        }
    }
}
