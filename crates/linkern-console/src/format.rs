//! Line rendering for each solver event.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::Level;

use crate::EventVisitor;

pub(crate) fn format_event(v: &EventVisitor, level: Level, elapsed: f64) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v, elapsed),
        "solve_end" => format_solve_end(v, elapsed),
        "sweep_end" => format_sweep_end(v, elapsed),
        "improvement" if level == Level::TRACE => format_improvement(v, elapsed),
        "candidate_rejected" if level == Level::WARN => format_rejected(v, elapsed),
        "multi_start_start" => format_multi_start_start(v, elapsed),
        "multi_start_end" => format_multi_start_end(v, elapsed),
        _ => String::new(),
    }
}

fn format_elapsed(elapsed: f64) -> String {
    format!("{elapsed:>7.3}s").bright_black().to_string()
}

fn format_count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

/// Length with thousands separators and three decimals.
pub(crate) fn format_length(length: f64) -> String {
    if !length.is_finite() {
        return "N/A".to_string();
    }
    let whole = length.trunc() as u64;
    let frac = ((length - length.trunc()) * 1000.0).round() as u64;
    if frac >= 1000 {
        format!("{}.000", (whole + 1).to_formatted_string(&Locale::en))
    } else {
        format!("{}.{frac:03}", whole.to_formatted_string(&Locale::en))
    }
}

pub(crate) fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

fn format_solve_start(v: &EventVisitor, elapsed: f64) -> String {
    format!(
        "{} {} Optimizing │ {} nodes │ initial length {}",
        format_elapsed(elapsed),
        "▶".bright_green().bold(),
        format_count(v.node_count).bright_yellow(),
        format_length(v.initial_length.unwrap_or(f64::NAN)).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor, elapsed: f64) -> String {
    let status = v.status.as_deref().unwrap_or("unknown");
    let status = if status == "converged" {
        status.bright_green().bold().to_string()
    } else {
        status.yellow().bold().to_string()
    };

    format!(
        "{} {} Done │ length {} │ {} sweeps │ {} improvements │ {} │ {}",
        format_elapsed(elapsed),
        "■".bright_cyan().bold(),
        format_length(v.length.unwrap_or(f64::NAN)).bright_white().bold(),
        format_count(v.sweeps).white(),
        format_count(v.improvements).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        status,
    )
}

fn format_sweep_end(v: &EventVisitor, elapsed: f64) -> String {
    format!(
        "{} {} Sweep {:>6} │ length {:>16} │ {} improvements",
        format_elapsed(elapsed),
        "⟳".bright_blue(),
        format_count(v.sweep).white(),
        format_length(v.length.unwrap_or(f64::NAN)).bright_magenta(),
        format_count(v.improvements).white(),
    )
}

fn format_improvement(v: &EventVisitor, elapsed: f64) -> String {
    format!(
        "{} {} t1 {:>8} │ {:<11} │ depth {:>3} │ gain {:>12} │ length {}",
        format_elapsed(elapsed),
        "✓".bright_green(),
        format_count(v.t1).bright_black(),
        v.direction.as_deref().unwrap_or("?"),
        v.depth.unwrap_or(0),
        format_length(v.gain.unwrap_or(f64::NAN)).bright_green(),
        format_length(v.length.unwrap_or(f64::NAN)).bright_black(),
    )
}

fn format_rejected(v: &EventVisitor, elapsed: f64) -> String {
    format!(
        "{} {} candidate from t1 {} rejected: {}",
        format_elapsed(elapsed),
        "✗".bright_red(),
        format_count(v.t1),
        v.reason.as_deref().unwrap_or("unknown").red(),
    )
}

fn format_multi_start_start(v: &EventVisitor, elapsed: f64) -> String {
    format!(
        "{} {} Multi-start │ {} starts │ {} threads │ {} nodes",
        format_elapsed(elapsed),
        "▶".bright_green().bold(),
        format_count(v.starts).bright_yellow(),
        format_count(v.threads).bright_yellow(),
        format_count(v.node_count).bright_yellow(),
    )
}

fn format_multi_start_end(v: &EventVisitor, elapsed: f64) -> String {
    format!(
        "{} {} Multi-start done │ best length {} from node {}",
        format_elapsed(elapsed),
        "■".bright_cyan().bold(),
        format_length(v.best_length.unwrap_or(f64::NAN)).bright_white().bold(),
        format_count(v.best_start).white(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(4.0), "4.000");
        assert_eq!(format_length(12345.6789), "12,345.679");
        assert_eq!(format_length(0.9999), "1.000");
        assert_eq!(format_length(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_solve_end_line() {
        let mut v = visitor("solve_end");
        v.length = Some(1234.5);
        v.sweeps = Some(3);
        v.improvements = Some(1200);
        v.duration_ms = Some(42);
        v.status = Some("converged".to_string());

        let line = format_event(&v, Level::INFO, 0.5);
        assert!(line.contains("1,234.500"));
        assert!(line.contains("1,200"));
        assert!(line.contains("42ms"));
        assert!(line.contains("converged"));
    }

    #[test]
    fn test_improvement_only_at_trace() {
        let mut v = visitor("improvement");
        v.t1 = Some(7);
        v.direction = Some("successor".to_string());
        v.depth = Some(3);
        v.gain = Some(2.5);

        assert!(format_event(&v, Level::DEBUG, 0.0).is_empty());
        let line = format_event(&v, Level::TRACE, 0.0);
        assert!(line.contains("successor"));
        assert!(line.contains("2.500"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("construction_end"), Level::INFO, 0.0).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO, 0.0).is_empty());
    }
}
