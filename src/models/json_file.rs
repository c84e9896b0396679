use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::Result;

pub async fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}

pub async fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let data = read(path).await?;

    Ok(serde_json::from_slice(&data)?)
}

/// Writes `value` as four-space indented JSON, creating parent directories.
/// Non-ASCII text is written as-is.
pub async fn write_json_pretty<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut data = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));

    value.serialize(&mut serializer)?;

    tokio::fs::write(path, data).await?;

    Ok(())
}
