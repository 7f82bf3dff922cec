//! Keyword decision tables.
//!
//! Every keyword-driven classification in the advisor is an ordered list of
//! rules evaluated top to bottom against a lower-cased description.

/// How a rule's keywords combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// At least one keyword occurs
    Any,
    /// Every keyword occurs
    All,
}

/// A (predicate, effect) pair over description keywords
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub mode: Match,
    pub effect: T,
}

impl<T> KeywordRule<T> {
    pub const fn any(keywords: &'static [&'static str], effect: T) -> Self {
        Self {
            keywords,
            mode: Match::Any,
            effect,
        }
    }

    pub const fn all(keywords: &'static [&'static str], effect: T) -> Self {
        Self {
            keywords,
            mode: Match::All,
            effect,
        }
    }

    /// `text` must already be lower-cased
    pub fn matches(&self, text: &str) -> bool {
        match self.mode {
            Match::Any => self.keywords.iter().any(|k| text.contains(k)),
            Match::All => self.keywords.iter().all(|k| text.contains(k)),
        }
    }
}

/// Effect of the first matching rule
pub fn first_match<'a, T>(rules: &'a [KeywordRule<T>], text: &str) -> Option<&'a T> {
    rules.iter().find(|r| r.matches(text)).map(|r| &r.effect)
}

/// Effects of every matching rule, in table order
pub fn all_matches<'a, T>(
    rules: &'a [KeywordRule<T>],
    text: &'a str,
) -> impl Iterator<Item = &'a T> + 'a {
    rules.iter().filter(move |r| r.matches(text)).map(|r| &r.effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[KeywordRule<&str>] = &[
        KeywordRule::all(&["model", "language"], "both"),
        KeywordRule::any(&["serving", "deployment"], "serving"),
        KeywordRule::any(&["model"], "model"),
    ];

    #[test]
    fn test_any_and_all() {
        assert!(RULES[0].matches("a language model"));
        assert!(!RULES[0].matches("a model"));
        assert!(RULES[1].matches("model deployment"));
    }

    #[test]
    fn test_first_match_respects_order() {
        assert_eq!(first_match(RULES, "large language model"), Some(&"both"));
        assert_eq!(first_match(RULES, "model serving"), Some(&"serving"));
        assert_eq!(first_match(RULES, "nothing here"), None);
    }

    #[test]
    fn test_all_matches() {
        let effects: Vec<_> = all_matches(RULES, "language model serving").collect();
        assert_eq!(effects, vec![&"both", &"serving", &"model"]);
    }
}
