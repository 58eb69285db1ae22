//! Profile storage implementation

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::models::UserProfile;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

type Result<T> = std::result::Result<T, StorageError>;

/// Where user profiles live. The analytics code never depends on a
/// particular implementation.
pub trait ProfileRepository {
    /// Load a profile; an unknown user yields an empty profile
    fn load(&self, user_id: &str) -> Result<UserProfile>;

    /// Persist a profile, replacing any previous version
    fn save(&self, profile: &UserProfile) -> Result<()>;

    /// Ids of every stored profile, sorted
    fn list_users(&self) -> Result<Vec<String>>;
}

/// One JSON file per user under `<data_dir>/profiles/`
pub struct ProfileStorage {
    profiles_dir: PathBuf,
}

impl ProfileStorage {
    /// Create a new profile storage
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let profiles_dir = data_dir.join("profiles");
        fs::create_dir_all(&profiles_dir)?;

        Ok(Self { profiles_dir })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("moodlog"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Get the path to a user's profile file
    fn profile_file(&self, user_id: &str) -> Result<PathBuf> {
        let valid = !user_id.is_empty()
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !user_id.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidOperation(format!(
                "Invalid user id: {:?}",
                user_id
            )));
        }
        Ok(self.profiles_dir.join(format!("{}.json", user_id)))
    }
}

impl ProfileRepository for ProfileStorage {
    fn load(&self, user_id: &str) -> Result<UserProfile> {
        let path = self.profile_file(user_id)?;
        if !path.exists() {
            log::debug!("No stored profile for {}, starting empty", user_id);
            return Ok(UserProfile::new(user_id));
        }

        let content = fs::read_to_string(path)?;
        let mut profile: UserProfile = serde_json::from_str(&content)?;
        // Files written by other tools may not keep the ordering invariant
        profile.mood_entries.sort_by(|a, b| b.date.cmp(&a.date));
        profile.journal_entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(profile)
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        let path = self.profile_file(&profile.user_id)?;
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(path, json)?;
        log::debug!(
            "Saved profile {} ({} moods, {} journal entries)",
            profile.user_id,
            profile.mood_entries.len(),
            profile.journal_entries.len()
        );
        Ok(())
    }

    fn list_users(&self) -> Result<Vec<String>> {
        let mut users = Vec::new();
        for entry in fs::read_dir(&self.profiles_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                users.push(stem.to_string());
            }
        }
        users.sort();
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::JournalRecord;
    use crate::mood::MoodRecord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (ProfileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = ProfileStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_load_unknown_user_is_empty() {
        let (storage, _temp) = create_test_storage();
        let profile = storage.load("ghost").unwrap();
        assert_eq!(profile.user_id, "ghost");
        assert!(profile.mood_entries.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (storage, _temp) = create_test_storage();
        let date = NaiveDate::from_ymd_opt(2024, 8, 2).unwrap();

        let mut profile = UserProfile::new("main_user");
        profile.save_mood_entry(MoodRecord::new(date, 4, Some("calm day".to_string())));
        profile.save_journal_entry(JournalRecord::new(date, "Une belle journée").with_sentiment(0.5));
        profile.add_goal("Read 30 minutes");
        storage.save(&profile).unwrap();

        let loaded = storage.load("main_user").unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_list_users() {
        let (storage, _temp) = create_test_storage();
        storage.save(&UserProfile::new("bob")).unwrap();
        storage.save(&UserProfile::new("alice")).unwrap();

        assert_eq!(storage.list_users().unwrap(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_rejects_path_like_user_ids() {
        let (storage, _temp) = create_test_storage();
        for bad in ["", "../etc", "a/b", ".hidden", "jos\u{e9}", "\u{444}\u{430}\u{439}\u{43b}"] {
            assert!(matches!(
                storage.load(bad),
                Err(StorageError::InvalidOperation(_))
            ));
        }
    }
}
