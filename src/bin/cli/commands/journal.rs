use anyhow::{bail, Result};

use moodlog_lib::journal::analyze_sentiment;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, text: Option<String>, date: Option<&str>, format: &OutputFormat) -> Result<()> {
    let Some(text) = text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) else {
        bail!("Journal text is required (pass it as an argument or pipe it on stdin)");
    };
    let date = App::parse_date(date)?;

    let record = app.write_journal(date, text)?;
    let sentiment = analyze_sentiment(std::slice::from_ref(&record), app.analyzer.lexicon());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "entry": record,
                "sentiment": sentiment,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Saved journal entry for {} ({} characters)",
                record.date,
                record.text.chars().count()
            );
            println!("  Tone: {}", sentiment.classification.label());
        }
    }

    Ok(())
}
