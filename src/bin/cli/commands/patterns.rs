use anyhow::Result;

use moodlog_lib::insights::forecast;
use moodlog_lib::insights::narrative::{forecast_text, sentiment_text, temporal_text, trend_text};
use moodlog_lib::journal::analyze_sentiment;
use moodlog_lib::mood::series::weekly_pattern;
use moodlog_lib::mood::day_name;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let profile = app.load_profile()?;
    let moods = &profile.mood_entries;
    let sentiment = analyze_sentiment(&profile.journal_entries, app.analyzer.lexicon());
    let prediction = forecast(moods);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "weeklyPattern": weekly_pattern(moods),
                "sentiment": sentiment,
                "forecast": prediction,
                "text": {
                    "trend": trend_text(moods),
                    "temporal": temporal_text(moods),
                    "sentiment": sentiment_text(&sentiment),
                    "forecast": forecast_text(&prediction),
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", trend_text(moods));
            println!("{}", temporal_text(moods));
            println!("{}", sentiment_text(&sentiment));
            println!("{}", forecast_text(&prediction));

            let pattern = weekly_pattern(moods);
            if !pattern.is_empty() {
                println!("\nWeekday averages:");
                for (day, avg) in pattern.iter() {
                    println!("  {:<10} {:.1}", day_name(day), avg);
                }
            }
        }
    }

    Ok(())
}
