use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use moodlog_lib::config::AnalyticsConfig;
use moodlog_lib::insights::Analyzer;
use moodlog_lib::journal::JournalRecord;
use moodlog_lib::mood::MoodRecord;
use moodlog_lib::profile::{ProfileRepository, ProfileStorage, UserProfile};

/// Shared application state for CLI commands
pub struct App {
    pub storage: ProfileStorage,
    pub analyzer: Analyzer,
    pub user_id: String,
}

impl App {
    /// Initialize from explicit paths or the platform defaults
    pub fn new(
        data_dir: Option<PathBuf>,
        config_path: Option<PathBuf>,
        user: Option<&str>,
    ) -> Result<Self> {
        let config = match config_path.or_else(AnalyticsConfig::default_path) {
            Some(path) => AnalyticsConfig::load(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => AnalyticsConfig::default(),
        };

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => ProfileStorage::default_data_dir().context("Failed to get data directory")?,
        };
        let storage = ProfileStorage::new(data_dir).context("Failed to initialize profile storage")?;

        let user_id = user.map(str::to_string).unwrap_or_else(|| config.user_id.clone());
        let analyzer = Analyzer::from_config(&config);

        Ok(Self {
            storage,
            analyzer,
            user_id,
        })
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Parse an optional YYYY-MM-DD argument, defaulting to today
    pub fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
        match date {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s)),
            None => Ok(Self::today()),
        }
    }

    pub fn load_profile(&self) -> Result<UserProfile> {
        self.storage
            .load(&self.user_id)
            .with_context(|| format!("Failed to load profile '{}'", self.user_id))
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.storage
            .save(profile)
            .with_context(|| format!("Failed to save profile '{}'", profile.user_id))
    }

    /// Record a mood, replacing any entry already logged for that day
    pub fn log_mood(&self, date: NaiveDate, level: i64, note: Option<String>) -> Result<MoodRecord> {
        let mut profile = self.load_profile()?;
        let record = MoodRecord::new(date, level, note);
        profile.save_mood_entry(record.clone());
        self.save_profile(&profile)?;
        Ok(record)
    }

    /// Record a journal entry, replacing any entry already written that day
    pub fn write_journal(&self, date: NaiveDate, text: String) -> Result<JournalRecord> {
        let mut profile = self.load_profile()?;
        let record = JournalRecord::new(date, text);
        profile.save_journal_entry(record.clone());
        self.save_profile(&profile)?;
        Ok(record)
    }
}
