use anyhow::{ensure, Context, Result};
use regex::Regex;

/// A recognizable hazardous ingredient: a compiled matching rule plus the
/// canonical label recorded in detection results.
#[derive(Debug)]
pub struct IngredientSignature {
    pattern: Regex,
    label: &'static str,
}

impl IngredientSignature {
    fn new(pattern: &str, label: &'static str) -> Result<Self> {
        // (?i) keeps each signature usable on raw text even though the
        // normalizer already lowercases its output.
        let pattern = Regex::new(&format!("(?i){pattern}"))
            .with_context(|| format!("invalid signature pattern for {label}"))?;
        Ok(Self { pattern, label })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// The ordered, immutable list of ingredient signatures.
///
/// Scan order is definition order, and detection results inherit it; entries
/// must stay ordered most-specific-first where patterns overlap (the full
/// sulfate names come before the SLS/SLES abbreviations).
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<IngredientSignature>,
}

impl Catalog {
    /// Build the built-in catalog. A pattern that fails to compile is a
    /// programming defect and aborts startup.
    pub fn builtin() -> Result<Self> {
        let entries = vec![
            IngredientSignature::new(r"\bsodium laureth sulfate\b", "Sodium laureth sulfate")?,
            IngredientSignature::new(r"\bsodium lauryl sulfate\b", "Sodium lauryl sulfate")?,
            IngredientSignature::new(r"\b(sles|sls)\b", "SLS / SLES")?,
            IngredientSignature::new(r"\bmethylisothiazolinone\b", "Methylisothiazolinone (MI)")?,
            IngredientSignature::new(
                r"\bmethylchloroisothiazolinone\b",
                "Methylchloroisothiazolinone (MCI)",
            )?,
            IngredientSignature::new(r"\bparabens?\b", "Parabens")?,
            IngredientSignature::new(r"\bphthalates?\b", "Phthalates")?,
            IngredientSignature::new(r"\bformaldehyde\b", "Formaldehyde")?,
            IngredientSignature::new(r"\bbisphenol\s*a\b", "Bisphenol A (BPA)")?,
            IngredientSignature::new(r"\btriclosan\b", "Triclosan")?,
            IngredientSignature::new(r"\bbenzalkonium chloride\b", "Benzalkonium chloride")?,
            IngredientSignature::new(r"\bphenoxyethanol\b", "Phenoxyethanol")?,
            IngredientSignature::new(r"\baluminum\b", "Aluminum compounds")?,
            IngredientSignature::new(r"\bmercury\b", "Mercury")?,
            IngredientSignature::new(r"\barsenic\b", "Arsenic")?,
            IngredientSignature::new(r"\bcadmium\b", "Cadmium")?,
            IngredientSignature::new(r"\bhydroquinone\b", "Hydroquinone")?,
            IngredientSignature::new(r"\boxybenzone\b", "Oxybenzone")?,
            IngredientSignature::new(r"\bmineral oil\b", "Mineral oil")?,
        ];
        ensure!(!entries.is_empty(), "catalog must contain at least one signature");
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientSignature> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
