use log::{error, info};

use crate::config::Config;
use crate::models::ddragon_client::DDragonClient;
use crate::models::errors::ExtractorError;
use crate::models::extractor::Extractor;
use crate::models::league_api::LeagueApi;

mod config;
mod endpoints;
mod logging;
mod models;
mod util;

type Result<T> = std::result::Result<T, ExtractorError>;

const COUNTRIES: &[&str] = &["korea"];

async fn run(config: Config) -> Result<()> {
    let api = LeagueApi::new(DDragonClient::new(&config)?, &config);

    let extractor = Extractor::new(api, config).await?;

    info!("Exporting data for patch {}...", extractor.patch());

    extractor.export_locale_file().await?;
    extractor.export_champion_data(COUNTRIES).await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    logging::init(&config)?;

    if let Err(e) = run(config).await {
        error!("Extraction failed: {}", e);

        return Err(e);
    }

    Ok(())
}
