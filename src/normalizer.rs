use anyhow::Result;
use regex::Regex;

/// Canonicalizes raw OCR output into a single lowercase line the detector can
/// scan.
///
/// Rules, applied in order:
/// 1. A hyphen at a line break (optionally surrounded by whitespace) is removed
///    together with the break, rejoining a word the OCR engine wrapped. This
///    also merges legitimately hyphenated terms that happen to fall on a line
///    boundary; scanned label text does not let us tell the two apart.
/// 2. Remaining line breaks become single spaces.
/// 3. Whitespace runs collapse to one space; leading/trailing whitespace is
///    trimmed.
/// 4. The result is lowercased.
///
/// Compiled once at startup and shared read-only; `normalize` itself is total
/// and idempotent.
pub struct Normalizer {
    dehyphenate: Regex,
    line_breaks: Regex,
    whitespace_runs: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dehyphenate: Regex::new(r"-\s*\r?\n\s*")?,
            line_breaks: Regex::new(r"\r?\n")?,
            whitespace_runs: Regex::new(r"\s{2,}")?,
        })
    }

    /// Normalize raw OCR text. Absent input yields an empty string.
    pub fn normalize(&self, raw: Option<&str>) -> String {
        let Some(text) = raw else {
            return String::new();
        };

        let text = self.dehyphenate.replace_all(text, "");
        let text = self.line_breaks.replace_all(&text, " ");
        let text = self.whitespace_runs.replace_all(&text, " ");
        text.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new().unwrap()
    }

    #[test]
    fn test_absent_and_empty_input() {
        let n = normalizer();
        assert_eq!(n.normalize(None), "");
        assert_eq!(n.normalize(Some("")), "");
        assert_eq!(n.normalize(Some("   \n\t  ")), "");
    }

    #[test]
    fn test_dehyphenates_line_wrapped_words() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("paraben-\nated")), "parabenated");
        assert_eq!(n.normalize(Some("paraben- \r\n  ated")), "parabenated");
    }

    #[test]
    fn test_dehyphenation_joins_across_the_break() {
        // Hyphen-at-break removal is blind: "parabens-\nand" becomes one word,
        // so the parabens signature no longer matches there.
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("parabens-\nand formaldehyde")),
            "parabensand formaldehyde"
        );
    }

    #[test]
    fn test_collapses_breaks_and_whitespace() {
        let n = normalizer();
        assert_eq!(
            n.normalize(Some("Aqua,\r\nGlycerin,\n\nParfum")),
            "aqua, glycerin, parfum"
        );
        assert_eq!(n.normalize(Some("  sodium   lauryl \t sulfate ")), "sodium lauryl sulfate");
        // A lone tab is not a run; it survives, as the rules say.
        assert_eq!(n.normalize(Some("mineral\toil")), "mineral\toil");
    }

    #[test]
    fn test_lowercases() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("MERCURY")), "mercury");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        let inputs = [
            "Contains Sodium Lauryl Sulfate,\nParabens and trace Mercury.",
            "paraben-\nated",
            "  already   messy \r\n text ",
            "",
        ];
        for input in inputs {
            let once = n.normalize(Some(input));
            assert_eq!(n.normalize(Some(&once)), once);
        }
    }
}
