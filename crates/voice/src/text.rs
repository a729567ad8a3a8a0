use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse whitespace runs to one space and trim the ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// One entry of an ordered substitution table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Substitution {
    pub pattern: &'static str,
    pub replacement: &'static str,
    /// Only match where `pattern` is bounded by non-word characters.
    pub whole_word: bool,
}

impl Substitution {
    pub(crate) const fn literal(pattern: &'static str, replacement: &'static str) -> Self {
        Self { pattern, replacement, whole_word: false }
    }

    pub(crate) const fn word(pattern: &'static str, replacement: &'static str) -> Self {
        Self { pattern, replacement, whole_word: true }
    }
}

/// A substitution table compiled once, applied in declaration order.
pub(crate) struct SubstitutionTable {
    rules: Vec<(Regex, &'static str)>,
}

impl SubstitutionTable {
    pub(crate) fn compile(entries: &[Substitution]) -> Self {
        let rules = entries
            .iter()
            .map(|s| {
                let escaped = regex::escape(s.pattern);
                let source = if s.whole_word {
                    format!(r"\b{}\b", escaped)
                } else {
                    escaped
                };
                (Regex::new(&source).expect("escaped pattern is valid"), s.replacement)
            })
            .collect();
        Self { rules }
    }

    pub(crate) fn apply(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |acc, (re, replacement)| {
            // NoExpand: replacements are plain text, never `$group` references
            re.replace_all(&acc, regex::NoExpand(*replacement)).into_owned()
        })
    }

    /// Whether any rule would change `text`.
    pub(crate) fn matches(&self, text: &str) -> bool {
        self.rules.iter().any(|(re, _)| re.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
    }

    #[test]
    fn test_table_is_order_dependent() {
        let table = SubstitutionTable::compile(&[
            Substitution::literal("ab", "x"),
            Substitution::literal("xc", "done"),
        ]);
        assert_eq!(table.apply("abc"), "done");

        let reversed = SubstitutionTable::compile(&[
            Substitution::literal("xc", "done"),
            Substitution::literal("ab", "x"),
        ]);
        assert_eq!(reversed.apply("abc"), "xc");
    }

    #[test]
    fn test_whole_word_rule() {
        let table = SubstitutionTable::compile(&[Substitution::word("BA", "British Airways")]);
        assert_eq!(table.apply("Fly BA today"), "Fly British Airways today");
        assert_eq!(table.apply("BAGGAGE"), "BAGGAGE");
        assert!(!table.matches("BAGGAGE"));
    }

    #[test]
    fn test_replacement_is_not_expanded() {
        let table = SubstitutionTable::compile(&[Substitution::literal("fee", "$5")]);
        assert_eq!(table.apply("the fee"), "the $5");
    }
}
