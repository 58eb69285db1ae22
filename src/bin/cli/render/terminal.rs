use moodlog_lib::insights::Priority;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI color when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, use_color: bool) -> String {
    paint(text, Color::BOLD, use_color)
}

/// Green for good scores, yellow for middling, red for low
pub fn score_color(score: f64) -> &'static str {
    if score >= 70.0 {
        Color::GREEN
    } else if score >= 40.0 {
        Color::YELLOW
    } else {
        Color::RED
    }
}

/// Color by mood level on the 1-5 scale
pub fn level_color(level: f64) -> &'static str {
    if level >= 4.0 {
        Color::GREEN
    } else if level > 2.0 {
        Color::YELLOW
    } else {
        Color::RED
    }
}

pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => Color::RED,
        Priority::Medium => Color::YELLOW,
        Priority::Low => Color::CYAN,
    }
}

/// Horizontal bar for a 1-5 level, e.g. "███░░"
pub fn level_bar(level: f64) -> String {
    let filled = level.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(5 - filled))
}
