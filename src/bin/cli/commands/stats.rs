use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{bold, level_bar, level_color, paint};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let profile = app.load_profile()?;
    let stats = profile.stats(App::today());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "userId": profile.user_id,
                "stats": stats,
                "journalEntriesCount": profile.journal_entries.len(),
                "goals": profile.goals,
                "reminders": profile.reminders,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", bold(&format!("Profile: {}", profile.user_id), use_color));
            for (label, avg) in [
                ("7-day average ", stats.average_mood_last_7_days),
                ("30-day average", stats.average_mood_last_30_days),
            ] {
                println!(
                    "  {}  {:.1}/5 {}",
                    label,
                    avg,
                    paint(&level_bar(avg), level_color(avg), use_color)
                );
            }
            println!("  Mood entries     {}", stats.total_entries_count);
            println!("  Journal entries  {}", profile.journal_entries.len());
            println!("  Current streak   {} days", stats.streak_days);

            if !profile.goals.is_empty() {
                println!("\nGoals:");
                for goal in &profile.goals {
                    println!("  - {}", goal);
                }
            }
            if !profile.reminders.is_empty() {
                println!("\nReminders:");
                for reminder in &profile.reminders {
                    println!("  - {}", reminder);
                }
            }
        }
    }

    Ok(())
}
