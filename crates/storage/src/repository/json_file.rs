use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use super::YearStore;
use crate::error::Result;
use crate::models::{CompetitionYear, YearIndex};

/// Stores each year as `<dir>/<year>.json` next to an `index.json`
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens the store, creating the data directory if needed
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        tracing::debug!("JSON file store opened at {}", dir.display());
        Ok(Self { dir })
    }

    fn index_path(&self) -> PathBuf {
        self.dir.join("index.json")
    }

    fn year_path(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{}.json", year))
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        match fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // Write to a sibling temp file and rename so readers never see a
    // half-written record. Each write gets its own temp file; concurrent
    // writers of one record end up last-rename-wins.
    async fn write_json<T: Serialize + Sync>(path: &Path, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let tmp = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, path).await?;

        Ok(())
    }
}

#[async_trait]
impl YearStore for JsonFileStore {
    async fn read_index(&self) -> Result<YearIndex> {
        Ok(Self::read_json(&self.index_path()).await?.unwrap_or_default())
    }

    async fn write_index(&self, index: &YearIndex) -> Result<()> {
        Self::write_json(&self.index_path(), index).await
    }

    async fn read_year(&self, year: i32) -> Result<Option<CompetitionYear>> {
        Self::read_json(&self.year_path(year)).await
    }

    async fn write_year(&self, data: &CompetitionYear) -> Result<()> {
        Self::write_json(&self.year_path(data.year), data).await
    }

    async fn remove_year(&self, year: i32) -> Result<bool> {
        match fs::remove_file(self.year_path(year)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hostel, Status};

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("gc_store_test_{}", uuid::Uuid::new_v4().simple()))
    }

    fn hostel(id: &str) -> Hostel {
        Hostel {
            id: id.to_string(),
            name: id.to_string(),
            abbreviation: id.to_uppercase(),
            color: "#3b82f6".to_string(),
            logo: None,
        }
    }

    #[tokio::test]
    async fn test_missing_files_read_as_empty() {
        let dir = temp_dir();
        let store = JsonFileStore::open(&dir).await.unwrap();

        assert_eq!(store.read_index().await.unwrap(), YearIndex::default());
        assert!(store.read_year(2026).await.unwrap().is_none());
        assert!(!store.remove_year(2026).await.unwrap());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writes_to_one_year_all_succeed() {
        let dir = temp_dir();
        let store = std::sync::Arc::new(JsonFileStore::open(&dir).await.unwrap());

        let mut tasks = Vec::new();
        for i in 0..64 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let data = CompetitionYear::new(
                    2026,
                    format!("Take {}", i),
                    vec![hostel("satluj"), hostel("beas")],
                );
                store.write_year(&data).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = store.read_year(2026).await.unwrap().unwrap();
        assert!(stored.tagline.starts_with("Take "));
        // Only the year file is left behind, no temp files
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_year_and_index_persist_across_reopen() {
        let dir = temp_dir();

        let mut data = CompetitionYear::new(2026, "Rise", vec![hostel("satluj"), hostel("beas")]);
        data.status = Status::Ongoing;
        let mut index = YearIndex::default();
        index.insert(2026);

        {
            let store = JsonFileStore::open(&dir).await.unwrap();
            store.write_year(&data).await.unwrap();
            store.write_index(&index).await.unwrap();
        }

        let store = JsonFileStore::open(&dir).await.unwrap();
        assert_eq!(store.read_year(2026).await.unwrap(), Some(data));
        assert_eq!(store.read_index().await.unwrap(), index);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);

        assert!(store.remove_year(2026).await.unwrap());
        assert!(store.read_year(2026).await.unwrap().is_none());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_reads_camel_case_documents() {
        let dir = temp_dir();
        let store = JsonFileStore::open(&dir).await.unwrap();

        let json = r##"{
            "year": 2025,
            "tagline": "Legacy",
            "status": "completed",
            "hostels": [{ "id": "beas", "name": "Beas", "abbreviation": "BS", "color": "#ffffff" }],
            "legs": [{
                "id": "sports", "name": "Sports", "slug": "sports", "icon": "trophy",
                "theme": { "primary": "#f97316", "secondary": "#ea580c",
                           "gradient": "from-orange-500 to-orange-600",
                           "glowColor": "rgba(249, 115, 22, 0.4)" },
                "events": [{
                    "id": "relay", "name": "Relay", "image": "/events/relay.jpg",
                    "description": "", "rules": [], "maxPoints": 50,
                    "scores": [{ "hostelId": "beas", "points": 40 }],
                    "status": "completed"
                }]
            }],
            "gallery": [], "announcements": [], "contacts": []
        }"##;
        std::fs::write(dir.join("2025.json"), json).unwrap();

        let data = store.read_year(2025).await.unwrap().unwrap();
        assert_eq!(data.status, Status::Completed);
        assert_eq!(data.legs[0].events[0].max_points, 50);
        assert_eq!(data.legs[0].events[0].points_for("beas"), 40);

        let _ = std::fs::remove_dir_all(dir);
    }
}
