// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::plan::models::Plan;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::Io)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes the plan's records as pretty JSON under `<base>/<plan date>/`.
    pub fn save_records(&self, plan: &Plan) -> Result<PathBuf, StorageError> {
        let target_dir = self.plan_dir(plan)?;
        let file_path = target_dir.join("records.json");

        let records_json = serde_json::to_string_pretty(&plan.records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, records_json).map_err(StorageError::Io)?;

        tracing::info!(
            "Saved {} records to {}",
            plan.records.len(),
            file_path.display()
        );

        Ok(file_path)
    }

    /// Writes a JSON metadata sidecar next to the records.
    pub fn save_metadata(&self, plan: &Plan) -> Result<PathBuf, StorageError> {
        let target_dir = self.plan_dir(plan)?;
        let file_path = target_dir.join("records_meta.json");

        let metadata = serde_json::json!({
            "date": plan.date,
            "last_edited": plan.last_edited,
            "columns": plan.columns,
            "record_count": plan.records.len(),
            "raw_bytes": plan.raw.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::Io)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }

    /// One directory per plan date, e.g. `<base>/2021-11-23/`.
    fn plan_dir(&self, plan: &Plan) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(plan.date.to_string());

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::Io)?;
        }

        Ok(target_dir)
    }
}
