// src/ui.rs
use console::{Color, Style};

use crate::core::history::History;
use crate::core::GenerationOutput;
use crate::models::ThemeMode;
use crate::strength::Strength;

pub const BAR_CELLS: usize = 20;

/// Nearest xterm-256 colour for a `#rgb` or `#rrggbb` identifier.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };
    match u32::from_str_radix(&expanded, 16) {
        Ok(rgb) if expanded.len() == 6 => {
            let level = |shift: u32| cube_level(((rgb >> shift) & 0xff) as u8);
            Color::Color256(16 + 36 * level(16) + 6 * level(8) + level(0))
        }
        _ => Color::White,
    }
}

// Index of the closest step in the 6x6x6 colour cube (0, 95, 135, 175, 215, 255)
fn cube_level(value: u8) -> u8 {
    match value {
        0..=47 => 0,
        48..=114 => 1,
        v => (v - 35) / 40,
    }
}

fn meter_style(strength: &Strength) -> Style {
    Style::new().fg(hex_color(strength.color()))
}

fn text_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Dark => Style::new().white(),
        ThemeMode::Light => Style::new().black(),
    }
}

fn muted_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Dark => Style::new().color256(248),
        ThemeMode::Light => Style::new().color256(240),
    }
}

pub fn render_output(output: &GenerationOutput, theme: ThemeMode) -> String {
    match output {
        GenerationOutput::Empty => muted_style(theme).apply_to("Press \"Generate\"").to_string(),
        GenerationOutput::Password { password, .. } => text_style(theme).bold().apply_to(password).to_string(),
        GenerationOutput::Error(e) => Style::new().red().apply_to(e.to_string()).to_string(),
    }
}

pub fn strength_bar(strength: &Strength) -> String {
    let filled = strength.width_percent() as usize * BAR_CELLS / 100;
    let style = meter_style(strength);
    format!(
        "{}{}",
        style.apply_to("█".repeat(filled)),
        Style::new().color256(238).apply_to("░".repeat(BAR_CELLS - filled))
    )
}

pub fn render_strength(strength: &Strength) -> String {
    let label = meter_style(strength).apply_to(strength.label());
    format!("{} {}", strength_bar(strength), label)
}

pub fn render_history(history: &History, theme: ThemeMode) -> String {
    if history.is_empty() {
        return muted_style(theme).apply_to("No passwords yet").to_string();
    }

    history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>2}. {:<32}  {}",
                i + 1,
                text_style(theme).apply_to(&entry.password),
                muted_style(theme).apply_to(&entry.timestamp)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
