use std::collections::HashMap;

use anyhow::{ensure, Result};

/// Score assumed for a matched label the table does not know about.
pub const DEFAULT_SEVERITY: u8 = 5;

/// Maximum hazard score on the 0..=10 scale.
pub const MAX_SEVERITY: u8 = 10;

/// Immutable canonical label → hazard score mapping, built once at startup.
#[derive(Debug)]
pub struct SeverityTable {
    scores: HashMap<String, u8>,
}

impl SeverityTable {
    /// Built-in reference scores (10 = most hazardous).
    pub fn builtin() -> Self {
        let scores = [
            ("Sodium laureth sulfate", 6),
            ("Sodium lauryl sulfate", 7),
            ("SLS / SLES", 7),
            ("Methylisothiazolinone (MI)", 9),
            ("Methylchloroisothiazolinone (MCI)", 9),
            ("Parabens", 6),
            ("Phthalates", 8),
            ("Formaldehyde", 9),
            ("Bisphenol A (BPA)", 9),
            ("Triclosan", 7),
            ("Benzalkonium chloride", 7),
            ("Phenoxyethanol", 6),
            ("Aluminum compounds", 6),
            ("Mercury", 10),
            ("Arsenic", 10),
            ("Cadmium", 10),
            ("Hydroquinone", 8),
            ("Oxybenzone", 7),
            ("Mineral oil", 5),
        ]
        .into_iter()
        .map(|(label, score)| (label.to_string(), score))
        .collect();

        Self { scores }
    }

    /// Apply per-label overrides from the config file. Scores outside 0..=10
    /// are a configuration defect and rejected at startup.
    pub fn with_overrides(mut self, overrides: &HashMap<String, u8>) -> Result<Self> {
        for (label, &score) in overrides {
            ensure!(
                score <= MAX_SEVERITY,
                "severity override for {label:?} is {score}, must be 0..=10"
            );
            self.scores.insert(label.clone(), score);
        }
        Ok(self)
    }

    /// Look up a label's score, falling back to [`DEFAULT_SEVERITY`] for
    /// labels the table does not carry.
    pub fn severity_of(&self, label: &str) -> u8 {
        self.scores.get(label).copied().unwrap_or(DEFAULT_SEVERITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scores() {
        let table = SeverityTable::builtin();
        assert_eq!(table.severity_of("Mercury"), 10);
        assert_eq!(table.severity_of("Parabens"), 6);
        assert_eq!(table.severity_of("Mineral oil"), 5);
        assert_eq!(table.severity_of("Bisphenol A (BPA)"), 9);
    }

    #[test]
    fn test_unknown_label_defaults() {
        let table = SeverityTable::builtin();
        assert_eq!(table.severity_of("Unobtainium"), DEFAULT_SEVERITY);
    }

    #[test]
    fn test_overrides_replace_builtin_scores() {
        let overrides = HashMap::from([("Parabens".to_string(), 9)]);
        let table = SeverityTable::builtin().with_overrides(&overrides).unwrap();
        assert_eq!(table.severity_of("Parabens"), 9);
        assert_eq!(table.severity_of("Mercury"), 10);
    }

    #[test]
    fn test_out_of_range_override_rejected() {
        let overrides = HashMap::from([("Parabens".to_string(), 11)]);
        assert!(SeverityTable::builtin().with_overrides(&overrides).is_err());
    }
}
