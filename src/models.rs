pub mod champion_assets;
pub mod champion_cache;
pub mod champion_record;
pub mod ddragon_champions;
pub mod ddragon_client;
pub mod errors;
pub mod extractor;
pub mod json_file;
pub mod league_api;
pub mod locale;
