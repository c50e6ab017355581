// Strips temporal marker words from Portuguese prose so a document reads as a
// first edition rather than a revision log.

use anyhow::Result;
use regex_automata::{meta::Regex, util::syntax};
use tracing::debug;

/// "adicionado", "incluído", "novo", "atualizado", "modificado", "alterado"
pub const CHANGE_MARKERS: &str = r"\b(adicionado|incluído|novo|atualizado|modificado|alterado)\b";
/// "anteriormente", "previamente", "originalmente"
pub const PAST_MARKERS: &str = r"\b(anteriormente|previamente|originalmente)\b";
/// "agora", "atualmente", "neste momento"
pub const PRESENT_MARKERS: &str = r"\b(agora|atualmente|neste momento)\b";

/// A case-insensitive pattern whose matches are deleted outright
pub struct NormalizationRule {
    pattern: &'static str,
    regex: Regex,
}

impl NormalizationRule {
    pub fn new(pattern: &'static str) -> Result<Self> {
        // WHY: meta::Regex rather than a dense DFA; \b must be Unicode-aware for accented words
        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(true))
            .build(pattern)?;
        Ok(Self { pattern, regex })
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Delete every match, returning the new text and how many matches went.
    /// Surrounding characters are copied as-is, so "a X b" becomes "a  b".
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;
        let mut removed = 0;

        for m in self.regex.find_iter(text) {
            result.push_str(&text[last_end..m.start()]);
            last_end = m.end();
            removed += 1;
        }
        result.push_str(&text[last_end..]);

        (result, removed)
    }
}

/// Ordered rule set removing change, past and present temporal markers
pub struct TemporalNormalizer {
    rules: Vec<NormalizationRule>,
}

impl TemporalNormalizer {
    pub fn new() -> Result<Self> {
        let rules = [CHANGE_MARKERS, PAST_MARKERS, PRESENT_MARKERS]
            .into_iter()
            .map(NormalizationRule::new)
            .collect::<Result<Vec<_>>>()?;

        debug!("Compiled {} normalization rules", rules.len());

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[NormalizationRule] {
        &self.rules
    }

    /// Remove all temporal markers; later rules see the output of earlier ones
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_counting(text).0
    }

    /// Number of matches `normalize` would remove from `text`
    pub fn count_matches(&self, text: &str) -> usize {
        self.normalize_counting(text).1
    }

    fn normalize_counting(&self, text: &str) -> (String, usize) {
        let mut current = text.to_string();
        let mut total = 0;
        for rule in &self.rules {
            let (next, removed) = rule.apply(&current);
            current = next;
            total += removed;
        }
        (current, total)
    }
}
