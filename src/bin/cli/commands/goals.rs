use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run_goal(app: &App, text: &str, remove: bool, format: &OutputFormat) -> Result<()> {
    let mut profile = app.load_profile()?;
    let changed = if remove {
        profile.remove_goal(text)
    } else {
        profile.add_goal(text)
    };
    if changed {
        app.save_profile(&profile)?;
    }

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "goal": text,
                "changed": changed,
                "goals": profile.goals,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let verb = match (remove, changed) {
                (false, true) => "Added goal",
                (false, false) => "Goal already exists",
                (true, true) => "Removed goal",
                (true, false) => "No such goal",
            };
            println!("{}: \"{}\"", verb, text);
            println!("  {} goals total", profile.goals.len());
        }
    }

    Ok(())
}

pub fn run_reminder(app: &App, text: &str, remove: bool, format: &OutputFormat) -> Result<()> {
    let mut profile = app.load_profile()?;
    let changed = if remove {
        profile.remove_reminder(text)
    } else {
        profile.add_reminder(text)
    };
    if changed {
        app.save_profile(&profile)?;
    }

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reminder": text,
                "changed": changed,
                "reminders": profile.reminders,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let verb = match (remove, changed) {
                (false, true) => "Added reminder",
                (false, false) => "Reminder already exists",
                (true, true) => "Removed reminder",
                (true, false) => "No such reminder",
            };
            println!("{}: \"{}\"", verb, text);
        }
    }

    Ok(())
}
