use colored::{Color, Colorize};

use crate::models::{DetectionResult, RiskVerdict};

const ITEM_METER_WIDTH: usize = 30;
const OVERALL_METER_WIDTH: usize = 50;

/// Render the colored terminal report.
///
/// `verdict` carries the (tier, average severity) pair for a non-empty result.
/// An empty result prints exactly `No toxic ingredients found` — downstream
/// tooling greps for that line, so it stays byte-stable.
pub fn render(result: &DetectionResult, verdict: Option<(RiskVerdict, f64)>, quiet: bool) {
    if result.is_empty() {
        println!("No toxic ingredients found");
        return;
    }

    if !quiet {
        println!("Toxic ingredients (severity meter 0-10):");
        for (label, severity) in result.iter() {
            // Pad before coloring; ANSI escapes would otherwise count
            // against the field width.
            println!(
                "{} {:>2}/10  {}",
                format!("{:<35}", label).cyan(),
                severity,
                meter(severity, ITEM_METER_WIDTH).color(severity_color(severity))
            );
        }
    }

    let Some((verdict, average)) = verdict else {
        return;
    };

    if !quiet {
        println!();
        println!("Overall toxicity score: {:.2} / 10", average);
        println!(
            "Overall meter: {}",
            meter(average.round() as u8, OVERALL_METER_WIDTH).color(average_color(average))
        );
        println!();
    }

    println!(
        "Verdict: {} - {}",
        verdict.to_string().color(verdict_color(verdict)),
        verdict.message()
    );
}

/// A horizontal meter for a 0..=10 score, filled proportionally.
fn meter(score: u8, width: usize) -> String {
    let filled = ((f64::from(score) / 10.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}

fn severity_color(severity: u8) -> Color {
    if severity >= 8 {
        Color::Red
    } else if severity >= 5 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn average_color(average: f64) -> Color {
    if average > 6.0 {
        Color::Red
    } else if average > 3.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn verdict_color(verdict: RiskVerdict) -> Color {
    match verdict {
        RiskVerdict::Safe => Color::Green,
        RiskVerdict::Caution => Color::Yellow,
        RiskVerdict::Avoid => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_fill_is_proportional() {
        assert_eq!(meter(0, 30), "·".repeat(30));
        assert_eq!(meter(10, 30), "█".repeat(30));
        assert_eq!(meter(5, 30), format!("{}{}", "█".repeat(15), "·".repeat(15)));
        // 7/10 of 30 cells = 21
        assert_eq!(meter(7, 30), format!("{}{}", "█".repeat(21), "·".repeat(9)));
    }

    #[test]
    fn test_meter_rounds_to_nearest_cell() {
        // 3/10 of 50 = 15 exactly; 3/10 of 8 = 2.4 rounds down to 2
        assert_eq!(meter(3, 50).chars().filter(|&c| c == '█').count(), 15);
        assert_eq!(meter(3, 8).chars().filter(|&c| c == '█').count(), 2);
    }

    #[test]
    fn test_severity_color_bands() {
        assert_eq!(severity_color(8), Color::Red);
        assert_eq!(severity_color(7), Color::Yellow);
        assert_eq!(severity_color(5), Color::Yellow);
        assert_eq!(severity_color(4), Color::Green);
    }

    #[test]
    fn test_average_color_bands() {
        assert_eq!(average_color(6.01), Color::Red);
        assert_eq!(average_color(6.0), Color::Yellow);
        assert_eq!(average_color(3.01), Color::Yellow);
        assert_eq!(average_color(3.0), Color::Green);
    }
}
