use crate::records::EpisodeRecord;
use crate::Result;
use std::path::Path;

/// Writes records to a pretty-printed JSON array, creating parent
/// directories as needed
pub fn write_json(records: &[EpisodeRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;

    tracing::info!("Saved {} episodes to {}", records.len(), path.display());
    Ok(())
}

/// Reads records back from a JSON interchange file
pub fn read_json(path: &Path) -> Result<Vec<EpisodeRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records = serde_json::from_str(&content)?;
    Ok(records)
}
