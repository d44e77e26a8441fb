use crate::records::EpisodeRecord;
use crate::Result;
use std::path::Path;

/// Writes records to a CSV file with the `title,date,audio_url,page_url`
/// header, creating parent directories as needed
pub fn write_csv(records: &[EpisodeRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("Saved {} episodes to {}", records.len(), path.display());
    Ok(())
}

/// Reads records back from a CSV interchange file
///
/// An empty `audio_url` field deserializes to `None`, mirroring how
/// `write_csv` serializes absent audio URLs.
pub fn read_csv(path: &Path) -> Result<Vec<EpisodeRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: EpisodeRecord = result?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<EpisodeRecord> {
        vec![
            EpisodeRecord {
                title: "Episode One".to_string(),
                date: "Nov. 22, 2016".to_string(),
                audio_url: Some("https://example.com/audio/ep1.mp3".to_string()),
                page_url: "https://example.com/ep1".to_string(),
            },
            EpisodeRecord {
                title: "Episode Two".to_string(),
                date: "Unknown".to_string(),
                audio_url: None,
                page_url: "https://example.com/ep2".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.csv");

        let records = sample_records();
        write_csv(&records, &path).unwrap();
        let restored = read_csv(&path).unwrap();

        assert_eq!(restored, records);
    }

    #[test]
    fn test_csv_header_and_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.csv");

        write_csv(&sample_records(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let first_line = content.lines().next().unwrap();
        assert_eq!(first_line, "title,date,audio_url,page_url");
    }

    #[test]
    fn test_csv_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/episodes.csv");

        write_csv(&sample_records(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_record_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.csv");

        write_csv(&[], &path).unwrap();
        let restored = read_csv(&path).unwrap();
        assert!(restored.is_empty());
    }
}
