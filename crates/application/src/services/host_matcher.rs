//! Host matcher service
//!
//! Decides whether a request's destination host is eligible for fault
//! injection. Eligibility is a case-sensitive substring match against the
//! policy's host patterns, compiled into a single Aho-Corasick automaton
//! so every request costs one scan regardless of pattern count.

use aho_corasick::AhoCorasick;

use crate::error::ApplicationError;

/// Multi-pattern substring matcher over a policy's host patterns
#[derive(Debug)]
pub struct HostMatcher {
    automaton: AhoCorasick,
}

impl HostMatcher {
    /// Compile the patterns into a matcher
    ///
    /// An empty pattern list is valid and matches no host.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::MatcherBuild` if the automaton cannot be
    /// constructed (pattern set exceeding automaton limits).
    pub fn new<P: AsRef<str>>(patterns: &[P]) -> Result<Self, ApplicationError> {
        let automaton = AhoCorasick::new(patterns.iter().map(AsRef::as_ref))
            .map_err(|e| ApplicationError::MatcherBuild(e.to_string()))?;
        Ok(Self { automaton })
    }

    /// Whether any pattern occurs as a substring of `host`
    #[must_use]
    pub fn is_match(&self, host: &str) -> bool {
        self.automaton.is_match(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_domain() {
        let matcher = HostMatcher::new(&["anthropic.com"]).unwrap();
        assert!(matcher.is_match("anthropic.com"));
    }

    #[test]
    fn matches_subdomain_by_substring() {
        let matcher = HostMatcher::new(&["anthropic.com"]).unwrap();
        assert!(matcher.is_match("api.anthropic.com"));
    }

    #[test]
    fn ignores_unrelated_hosts() {
        let matcher = HostMatcher::new(&["anthropic.com", "together.xyz"]).unwrap();
        assert!(!matcher.is_match("example.com"));
        assert!(!matcher.is_match("api.openai.com"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let matcher = HostMatcher::new(&["anthropic.com"]).unwrap();
        assert!(!matcher.is_match("API.ANTHROPIC.COM"));
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        let matcher = HostMatcher::new::<&str>(&[]).unwrap();
        assert!(!matcher.is_match("anthropic.com"));
        assert!(!matcher.is_match(""));
    }

    #[test]
    fn any_of_several_patterns_matches() {
        let matcher =
            HostMatcher::new(&["together.xyz", "anthropic.com", "openrouter.ai"]).unwrap();
        assert!(matcher.is_match("api.together.xyz"));
        assert!(matcher.is_match("openrouter.ai"));
    }
}
