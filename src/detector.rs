use crate::models::DetectionResult;
use crate::toxicity::catalog::Catalog;
use crate::toxicity::severity::SeverityTable;

/// Scan normalized label text against the catalog.
///
/// Signatures are tested in catalog order and the result keeps that order,
/// regardless of where the terms sit in the text. Each label is recorded at
/// most once; the first catalog entry carrying it wins. Pure function of its
/// inputs — an empty or non-matching text yields an empty result, which is a
/// valid outcome, not an error.
pub fn detect(normalized_text: &str, catalog: &Catalog, severities: &SeverityTable) -> DetectionResult {
    let mut result = DetectionResult::new();

    for signature in catalog.iter() {
        if signature.matches(normalized_text) {
            let label = signature.label();
            result.record(label, severities.severity_of(label));
        }
    }

    result
}
