use indexmap::IndexMap;
use serde::Serialize;

/// Matched ingredients in catalog scan order: canonical label → severity (0..=10).
///
/// Keys keep the order in which the catalog scan found them, not the order the
/// terms appear in the label text. A label is recorded at most once; repeat
/// insertions are ignored.
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    matches: IndexMap<&'static str, u8>,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a match. The first recording of a label wins.
    pub fn record(&mut self, label: &'static str, severity: u8) {
        self.matches.entry(label).or_insert(severity);
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Arithmetic mean of all recorded severities.
    ///
    /// Only meaningful for a non-empty result; callers must treat the empty
    /// result as "nothing found" and skip verdict computation entirely.
    pub fn average(&self) -> f64 {
        let sum: u32 = self.matches.values().map(|&s| u32::from(s)).sum();
        sum as f64 / self.matches.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.matches.iter().map(|(&label, &severity)| (label, severity))
    }
}

/// Tiered risk classification derived from the mean severity of matched
/// ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskVerdict {
    Safe,
    Caution,
    Avoid,
}

impl RiskVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            RiskVerdict::Safe => "Low risk — generally safe for use.",
            RiskVerdict::Caution => {
                "Moderate risk — avoid if you have sensitive skin; better as rinse-off."
            }
            RiskVerdict::Avoid => {
                "High risk — avoid use, especially as leave-on product or on sensitive skin."
            }
        }
    }
}

impl std::fmt::Display for RiskVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskVerdict::Safe => write!(f, "SAFE"),
            RiskVerdict::Caution => write!(f, "CAUTION"),
            RiskVerdict::Avoid => write!(f, "AVOID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_first_severity() {
        let mut result = DetectionResult::new();
        result.record("Parabens", 6);
        result.record("Parabens", 9);

        assert_eq!(result.len(), 1);
        assert_eq!(result.iter().next(), Some(("Parabens", 6)));
    }

    #[test]
    fn test_average() {
        let mut result = DetectionResult::new();
        result.record("Sodium lauryl sulfate", 7);
        result.record("Parabens", 6);
        result.record("Mercury", 10);

        assert!((result.average() - 23.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut result = DetectionResult::new();
        result.record("Mercury", 10);
        result.record("Parabens", 6);

        let labels: Vec<_> = result.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Mercury", "Parabens"]);
    }
}
