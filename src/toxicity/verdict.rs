use crate::models::RiskVerdict;

/// Classify an average severity into a risk tier.
///
/// Boundaries are inclusive on the lower tier: exactly 3.0 is SAFE and
/// exactly 6.0 is CAUTION. Callers must not invoke this for an empty
/// detection result; "nothing found" is not a verdict.
pub fn classify(average: f64) -> RiskVerdict {
    if average <= 3.0 {
        RiskVerdict::Safe
    } else if average <= 6.0 {
        RiskVerdict::Caution
    } else {
        RiskVerdict::Avoid
    }
}
