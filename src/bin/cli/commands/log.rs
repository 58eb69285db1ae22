use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{level_bar, level_color, paint};
use crate::OutputFormat;

pub fn run(
    app: &App,
    level: i64,
    date: Option<&str>,
    note: Option<String>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let date = App::parse_date(date)?;
    if !(1..=5).contains(&level) {
        log::warn!("Mood level {} is outside 1-5 and will be clamped", level);
    }

    let record = app.log_mood(date, level, note)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Plain => {
            let level = record.level() as f64;
            println!(
                "Logged mood for {}: {}/5 {}",
                record.date,
                record.level(),
                paint(&level_bar(level), level_color(level), use_color)
            );
            if let Some(note) = &record.note {
                println!("  Note: {}", note);
            }
        }
    }

    Ok(())
}
