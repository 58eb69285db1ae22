//! User profile data models

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::journal::JournalRecord;
use crate::mood::{MoodRecord, NEUTRAL_LEVEL};

/// Everything recorded for one user.
///
/// Mood and journal entries are kept most-recent first with at most one
/// entry per date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub mood_entries: Vec<MoodRecord>,
    #[serde(default)]
    pub journal_entries: Vec<JournalRecord>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub reminders: Vec<String>,
}

/// Derived profile statistics (not stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub average_mood_last_7_days: f64,
    pub average_mood_last_30_days: f64,
    pub total_entries_count: usize,
    /// Consecutive days with a mood entry, ending today
    pub streak_days: u32,
}

/// First day of a `days`-long window ending at `today`, `None` on overflow
fn window_start(today: NaiveDate, days: u32) -> Option<NaiveDate> {
    Duration::try_days(i64::from(days)).and_then(|span| today.checked_sub_signed(span))
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    // ===== Mutations =====

    /// Insert a mood entry, replacing any entry for the same date
    pub fn save_mood_entry(&mut self, entry: MoodRecord) {
        self.mood_entries.retain(|e| e.date != entry.date);
        self.mood_entries.push(entry);
        self.mood_entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Insert a journal entry, replacing any entry for the same date
    pub fn save_journal_entry(&mut self, entry: JournalRecord) {
        self.journal_entries.retain(|e| e.date != entry.date);
        self.journal_entries.push(entry);
        self.journal_entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Add a goal unless it is already present
    pub fn add_goal(&mut self, goal: impl Into<String>) -> bool {
        let goal = goal.into();
        if self.goals.contains(&goal) {
            return false;
        }
        self.goals.push(goal);
        true
    }

    pub fn remove_goal(&mut self, goal: &str) -> bool {
        let len_before = self.goals.len();
        self.goals.retain(|g| g != goal);
        self.goals.len() != len_before
    }

    pub fn remove_reminder(&mut self, reminder: &str) -> bool {
        let len_before = self.reminders.len();
        self.reminders.retain(|r| r != reminder);
        self.reminders.len() != len_before
    }

    /// Add a reminder unless it is already present
    pub fn add_reminder(&mut self, reminder: impl Into<String>) -> bool {
        let reminder = reminder.into();
        if self.reminders.contains(&reminder) {
            return false;
        }
        self.reminders.push(reminder);
        true
    }

    // ===== Queries =====

    /// Mood entries dated on or after `today - days`, most recent first.
    /// A window reaching past the calendar range keeps every entry.
    pub fn recent_mood_entries(&self, today: NaiveDate, days: u32) -> Vec<MoodRecord> {
        match window_start(today, days) {
            Some(start) => self.mood_entries_in_range(start, NaiveDate::MAX),
            None => self.mood_entries_in_range(NaiveDate::MIN, NaiveDate::MAX),
        }
    }

    /// Journal entries dated on or after `today - days`, most recent first
    pub fn recent_journal_entries(&self, today: NaiveDate, days: u32) -> Vec<JournalRecord> {
        match window_start(today, days) {
            Some(start) => self.journal_entries_in_range(start, NaiveDate::MAX),
            None => self.journal_entries_in_range(NaiveDate::MIN, NaiveDate::MAX),
        }
    }

    /// Mood entries within an inclusive date range, most recent first
    pub fn mood_entries_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<MoodRecord> {
        let mut entries: Vec<MoodRecord> = self
            .mood_entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Journal entries within an inclusive date range, most recent first
    pub fn journal_entries_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<JournalRecord> {
        let mut entries: Vec<JournalRecord> = self
            .journal_entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Compute summary statistics relative to `today`
    pub fn stats(&self, today: NaiveDate) -> ProfileStats {
        ProfileStats {
            average_mood_last_7_days: self.average_within(today, 7),
            average_mood_last_30_days: self.average_within(today, 30),
            total_entries_count: self.mood_entries.len(),
            streak_days: self.current_streak(today),
        }
    }

    /// Average of entries at most `days` days before `today`, 3.0 when none
    fn average_within(&self, today: NaiveDate, days: i64) -> f64 {
        let levels: Vec<u32> = self
            .mood_entries
            .iter()
            .filter(|e| (today - e.date).num_days() <= days)
            .map(|e| e.level() as u32)
            .collect();

        if levels.is_empty() {
            return NEUTRAL_LEVEL;
        }
        levels.iter().sum::<u32>() as f64 / levels.len() as f64
    }

    /// Consecutive days with an entry, counting back from `today`
    fn current_streak(&self, today: NaiveDate) -> u32 {
        let mut dates: Vec<NaiveDate> = self.mood_entries.iter().map(|e| e.date).collect();
        dates.sort_by(|a, b| b.cmp(a));
        dates.dedup();

        let mut streak = 0u32;
        for date in dates.into_iter().filter(|d| *d <= today) {
            if (today - date).num_days() == streak as i64 {
                streak += 1;
            } else {
                break;
            }
        }
        streak
    }
}
