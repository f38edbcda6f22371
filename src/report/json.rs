use anyhow::Result;
use serde::Serialize;

use crate::models::{DetectionResult, RiskVerdict};

#[derive(Serialize)]
struct Report<'a> {
    /// Matched ingredients in catalog scan order.
    ingredients: Vec<Ingredient<'a>>,
    /// Mean severity; absent when nothing matched.
    average: Option<f64>,
    /// Risk tier; absent when nothing matched.
    verdict: Option<VerdictReport<'a>>,
}

#[derive(Serialize)]
struct Ingredient<'a> {
    label: &'a str,
    severity: u8,
}

#[derive(Serialize)]
struct VerdictReport<'a> {
    tier: RiskVerdict,
    message: &'a str,
}

/// Print the scan result as pretty JSON on stdout.
pub fn render(result: &DetectionResult, verdict: Option<(RiskVerdict, f64)>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report(result, verdict))?);
    Ok(())
}

fn report(result: &DetectionResult, verdict: Option<(RiskVerdict, f64)>) -> Report<'_> {
    Report {
        ingredients: result
            .iter()
            .map(|(label, severity)| Ingredient { label, severity })
            .collect(),
        average: verdict.map(|(_, average)| average),
        verdict: verdict.map(|(tier, _)| VerdictReport {
            tier,
            message: tier.message(),
        }),
    }
}
