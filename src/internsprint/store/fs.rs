use super::{DataStore, InternshipList};
use crate::config::SprintConfig;
use crate::error::{Result, SprintError};
use crate::model::UserProfile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FileStore {
    root: PathBuf,
    internships_file: String,
    profile_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, &SprintConfig::default())
    }

    pub fn with_config(root: PathBuf, config: &SprintConfig) -> Self {
        Self {
            root,
            internships_file: config.internships_file.clone(),
            profile_file: config.profile_file.clone(),
        }
    }

    pub fn internships_path(&self) -> PathBuf {
        self.root.join(&self.internships_file)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join(&self.profile_file)
    }

    /// Renames every data file that fails to parse to `<file>.bak`, so the next save
    /// cannot overwrite it. Returns the backup paths.
    pub fn set_aside_unreadable(&self) -> Result<Vec<PathBuf>> {
        let mut moved = Vec::new();
        if self.read_json::<InternshipList>(&self.internships_path()).is_err() {
            moved.push(set_aside(&self.internships_path())?);
        }
        if self.read_json::<UserProfile>(&self.profile_path()).is_err() {
            moved.push(set_aside(&self.profile_path())?);
        }
        Ok(moved)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SprintError::Io)?;
        }
        Ok(())
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(SprintError::Serialization)?;
        // Write then rename so a failed write never truncates the previous save
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(SprintError::Io)?;
        fs::rename(&tmp, path).map_err(SprintError::Io)?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }

    fn read_json<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(SprintError::Io)?;
        let value = serde_json::from_str(&content).map_err(SprintError::Serialization)?;
        debug!(path = %path.display(), "loaded");
        Ok(value)
    }
}

fn set_aside(path: &Path) -> Result<PathBuf> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    fs::rename(path, &backup).map_err(SprintError::Io)?;
    warn!(from = %path.display(), to = %backup.display(), "unreadable file set aside");
    Ok(backup)
}

impl DataStore for FileStore {
    fn save(&mut self, internships: &InternshipList) -> Result<()> {
        self.write_json(&self.internships_path(), internships)
    }

    fn load(&self) -> Result<InternshipList> {
        let raw: InternshipList = self.read_json(&self.internships_path())?;
        // Re-add through the store so a hand-edited file cannot misfile a record
        Ok(raw.into_records().collect())
    }

    fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.write_json(&self.profile_path(), profile)
    }

    fn load_profile(&self) -> Result<UserProfile> {
        self.read_json(&self.profile_path())
    }
}
