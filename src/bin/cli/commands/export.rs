use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use moodlog_lib::export::{write_export, ExportDocument};
use moodlog_lib::insights::AnalysisError;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, path: &Path, with_analysis: bool, format: &OutputFormat) -> Result<()> {
    let profile = app.load_profile()?;

    let summary = if with_analysis {
        match app.analyzer.analyze_profile(&profile) {
            Ok(summary) => Some(summary),
            Err(AnalysisError::InsufficientData(reason)) => {
                log::warn!("Exporting without analysis: {}", reason);
                None
            }
        }
    } else {
        None
    };

    let document = ExportDocument::new(&profile, App::today(), summary.as_ref(), Utc::now());
    write_export(path, &document)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.to_string_lossy(),
                "userId": document.metadata.user_id,
                "moodEntries": document.user_profile.mood_entries.len(),
                "journalEntries": document.user_profile.journal_entries.len(),
                "includesAnalysis": document.ai_analysis.is_some(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Exported {} mood entries and {} journal entries to {}",
                document.user_profile.mood_entries.len(),
                document.user_profile.journal_entries.len(),
                path.display()
            );
            if document.ai_analysis.is_none() && with_analysis {
                println!("  (analysis skipped: no mood entries yet)");
            }
        }
    }

    Ok(())
}
