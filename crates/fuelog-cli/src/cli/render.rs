//! # Rendering
//!
//! Terminal output for command results. Layout math (widths, truncation, padding) is
//! Unicode-aware and kept in plain functions returning `String`, so it can be tested
//! without a terminal; colour is applied last, via `colored`, which turns itself off
//! when stdout is not a TTY.

use chrono::{DateTime, Utc};
use colored::*;
use fuelog::commands::summary::LogSummary;
use fuelog::commands::{CmdMessage, MessageLevel};
use fuelog::config::{FuelogConfig, CONFIG_KEYS};
use fuelog::index::DisplayEntry;
use fuelog::metrics::TripMetrics;
use fuelog::model::Settings;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const BRAND_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;
const BAR_CHAR: char = '█';

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_entries(entries: &[DisplayEntry], currency: &str) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    for de in entries {
        let idx_str = format!("{:>3}. ", de.index);
        let e = &de.entry;

        let brand = pad_to_width(&truncate_to_width(&e.fuel_brand, BRAND_WIDTH), BRAND_WIDTH);
        let figures = format!(
            "{:>8.1} km {:>6.2} km/L {:>6.2} km/{} {} {:>8.2}",
            e.distance, e.volume_efficiency, e.cost_efficiency, currency, currency, e.amount_paid
        );

        let fixed = idx_str.width() + 12 + brand.width() + 1 + figures.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let notes = pad_to_width(&truncate_to_width(&e.notes, available), available);

        println!(
            "{}{}  {} {}  {}{}",
            idx_str.yellow(),
            e.date.to_string().dimmed(),
            brand.bold(),
            figures,
            notes.dimmed(),
            format_time_ago(e.created_at).dimmed()
        );
    }
}

pub fn print_metrics(metrics: &TripMetrics, currency: &str) {
    let m = metrics.metrics();
    let label = |s: &str| format!("{:<18}", s).dimmed();
    println!("{}{:.1} km", label("Distance"), m.distance);
    println!("{}{:.2} km/L", label("Volume efficiency"), m.volume_efficiency);
    println!(
        "{}{:.2} km/{}",
        label("Cost efficiency"),
        m.cost_efficiency,
        currency
    );
}

pub fn print_summary(summary: &LogSummary, currency: &str) {
    if summary.entry_count == 0 {
        println!("No entries found.");
        return;
    }

    let label = |s: &str| format!("{:<18}", s).dimmed();
    println!("{}{}", label("Entries"), summary.entry_count);
    println!("{}{:.1} km", label("Total distance"), summary.total_distance);
    println!(
        "{}{} {:.2}",
        label("Total spent"),
        currency,
        summary.total_spent
    );
    println!("{}{:.2} L", label("Total litres"), summary.total_litres);
    println!(
        "{}{}",
        label("Avg efficiency"),
        format!("{:.2} km/L", summary.avg_volume_efficiency).green()
    );
    println!(
        "{}{}",
        label("Avg cost"),
        format!("{:.2} km/{}", summary.avg_cost_efficiency, currency).green()
    );

    println!();
    println!("{}", "Efficiency trend (oldest first)".bold());
    let max = summary
        .trend
        .iter()
        .map(|p| p.volume_efficiency)
        .fold(0.0_f64, f64::max);
    for point in &summary.trend {
        println!(
            "  {}  {} {:>6.2} km/L  {} {:.2}",
            point.date.to_string().dimmed(),
            pad_to_width(&trend_bar(point.volume_efficiency, max, BAR_WIDTH), BAR_WIDTH).cyan(),
            point.volume_efficiency,
            currency,
            point.amount_paid
        );
    }
}

pub fn print_settings(settings: &Settings) {
    let state = if settings.remote_mirroring_enabled {
        "enabled".green()
    } else {
        "disabled".yellow()
    };
    println!("mirroring = {}", state);
    let url = if settings.remote_endpoint_url.is_empty() {
        "(none)".to_string()
    } else {
        settings.remote_endpoint_url.clone()
    };
    println!("endpoint  = {}", url);
}

pub fn print_config(config: &FuelogConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// A bar `width` cells long for the largest value, proportionally shorter for the rest.
pub fn trend_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    BAR_CHAR.to_string().repeat(cells.clamp(1, width))
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
