use anyhow::{Context, Result};

use moodlog_lib::insights::narrative::advice_text;
use moodlog_lib::insights::score_breakdown;

use crate::app::App;
use crate::render::terminal::{bold, paint, priority_color, score_color, Color};
use crate::OutputFormat;

pub fn run(app: &App, days: Option<u32>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let profile = app.load_profile()?;
    let today = App::today();

    // A window narrows the series; totals still count every entry.
    let (moods, journals) = match days {
        Some(days) => (
            profile.recent_mood_entries(today, days),
            profile.recent_journal_entries(today, days),
        ),
        None => (profile.mood_entries.clone(), profile.journal_entries.clone()),
    };

    let summary = app
        .analyzer
        .analyze(
            &moods,
            &journals,
            profile.journal_entries.len(),
            profile.mood_entries.len(),
        )
        .context("Analysis needs at least one mood entry; log one with `moodlog log <level>`")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            let analysis = &summary.mood_analysis;
            let breakdown = score_breakdown(
                analysis.average_level,
                analysis.volatility_score,
                profile.mood_entries.len(),
                profile.journal_entries.len(),
            );

            println!(
                "{} {}",
                bold("Wellness score:", use_color),
                paint(
                    &format!("{:.1}/100", summary.wellness_score),
                    score_color(summary.wellness_score),
                    use_color
                )
            );
            println!(
                "  mood {:.1}/40  consistency {:.1}/30  engagement {:.1}/20  journal {:.1}/10",
                breakdown.mood, breakdown.consistency, breakdown.engagement, breakdown.journal
            );
            println!();
            println!("{}", summary.summary);
            println!();
            println!("Trend slope      {:.3}", analysis.trend_slope);
            println!("Volatility       {:.1}/100", analysis.volatility_score);
            println!("Mood changes     {}", analysis.transition_count);
            println!(
                "Streaks          current {} ({}), best positive {}, longest negative {}",
                analysis.streaks.current_streak,
                analysis.streaks.current_streak_kind.as_str(),
                analysis.streaks.max_positive_streak,
                analysis.streaks.max_negative_streak
            );
            println!(
                "Forecast         {:.1}/5 over the {} ({}, confidence {:.0}%)",
                summary.forecast.predicted_level,
                summary.forecast.horizon_label,
                summary.forecast.trend_kind.as_str(),
                summary.forecast.confidence * 100.0
            );

            if !summary.recommendations.is_empty() {
                println!("\n{}", bold("Recommendations:", use_color));
                for rec in &summary.recommendations {
                    println!(
                        "  [{}] {} ({})",
                        paint(rec.priority.as_str(), priority_color(rec.priority), use_color),
                        rec.title,
                        paint(rec.kind.as_str(), Color::GRAY, use_color)
                    );
                    println!("      {}", rec.description);
                }
            }

            println!("\n{}", advice_text(analysis, profile.journal_entries.len()));
        }
    }

    Ok(())
}
