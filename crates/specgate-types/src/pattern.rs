use serde::{Deserialize, Serialize};

/// How a forbidden pattern's value is compared against a source id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// The pattern value is a literal source id
    Exact,
    /// The pattern value ends in `*`; everything before it is a required prefix.
    /// A value without the trailing `*` only matches literally.
    #[serde(rename = "wildcard", alias = "prefix")]
    PrefixWildcard,
}

/// How a pattern matched a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternMatch {
    /// The candidate equals the pattern value
    Exact,
    /// The candidate starts with the wildcard prefix
    Prefix,
}

impl PatternKind {
    /// Pure matcher shared by every static check on patterns.
    ///
    /// Literal equality matches for every kind. A prefix wildcard whose value
    /// ends in `*` strips the trailing `*`s and matches any candidate starting
    /// with what remains; without a trailing `*` it is compared literally.
    pub fn matches(self, pattern_value: &str, candidate: &str) -> Option<PatternMatch> {
        if pattern_value == candidate {
            return Some(PatternMatch::Exact);
        }
        match self {
            PatternKind::PrefixWildcard if pattern_value.ends_with('*') => {
                let prefix = pattern_value.trim_end_matches('*');
                candidate.starts_with(prefix).then_some(PatternMatch::Prefix)
            }
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Exact => "exact",
            PatternKind::PrefixWildcard => "wildcard",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared exclusion. Must never overlap an allowed input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForbiddenPattern {
    pub pattern_type: PatternKind,
    pub pattern_value: String,
    pub reason: String,
}

impl ForbiddenPattern {
    pub fn exact(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            pattern_type: PatternKind::Exact,
            pattern_value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn wildcard(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            pattern_type: PatternKind::PrefixWildcard,
            pattern_value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn matches(&self, source_id: &str) -> Option<PatternMatch> {
        self.pattern_type.matches(&self.pattern_value, source_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_pattern_matches_only_equal_ids() {
        let p = ForbiddenPattern::exact("passwords_table", "sensitive");
        assert_eq!(p.matches("passwords_table"), Some(PatternMatch::Exact));
        assert_eq!(p.matches("passwords_table_v2"), None);
        assert_eq!(p.matches("users_table"), None);
    }

    #[test]
    fn wildcard_pattern_matches_prefix() {
        let p = ForbiddenPattern::wildcard("user_*", "user tables forbidden");
        assert_eq!(p.matches("user_profile"), Some(PatternMatch::Prefix));
        assert_eq!(p.matches("user_"), Some(PatternMatch::Prefix));
        assert_eq!(p.matches("users"), None);
        assert_eq!(p.matches("user_*"), Some(PatternMatch::Exact));
    }

    #[test]
    fn bare_star_matches_everything() {
        let p = ForbiddenPattern::wildcard("*", "deny all");
        assert_eq!(p.matches("anything"), Some(PatternMatch::Prefix));
        assert_eq!(p.matches(""), Some(PatternMatch::Prefix));
    }

    #[test]
    fn wildcard_without_trailing_star_is_literal() {
        let p = ForbiddenPattern::wildcard("user", "no star");
        assert_eq!(p.matches("users"), None);
        assert_eq!(p.matches("user_profile"), None);
        assert_eq!(p.matches("user"), Some(PatternMatch::Exact));

        let empty = ForbiddenPattern::wildcard("", "empty");
        assert_eq!(empty.matches("users"), None);
        assert_eq!(empty.matches(""), Some(PatternMatch::Exact));
    }

    #[test]
    fn exact_kind_does_not_interpret_stars() {
        let p = ForbiddenPattern::exact("user_*", "literal");
        assert_eq!(p.matches("user_profile"), None);
    }

    #[test]
    fn kind_wire_names() {
        assert_eq!(serde_json::to_string(&PatternKind::Exact).unwrap(), "\"exact\"");
        assert_eq!(
            serde_json::to_string(&PatternKind::PrefixWildcard).unwrap(),
            "\"wildcard\""
        );
        let kind: PatternKind = serde_json::from_str("\"prefix\"").unwrap();
        assert_eq!(kind, PatternKind::PrefixWildcard);
        assert!(serde_json::from_str::<PatternKind>("\"regex\"").is_err());
    }

    proptest! {
        #[test]
        fn wildcard_matches_any_extension_of_prefix(
            prefix in "[a-z_]{0,8}",
            suffix in "[a-z0-9_]{0,8}",
        ) {
            let pattern = format!("{prefix}*");
            let candidate = format!("{prefix}{suffix}");
            prop_assert!(PatternKind::PrefixWildcard.matches(&pattern, &candidate).is_some());
        }

        #[test]
        fn exact_never_matches_different_ids(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
            prop_assume!(a != b);
            prop_assert!(PatternKind::Exact.matches(&a, &b).is_none());
        }

        #[test]
        fn starless_wildcard_matches_only_itself(a in "[a-z_]{0,8}", b in "[a-z_]{0,8}") {
            prop_assume!(a != b);
            prop_assert!(PatternKind::PrefixWildcard.matches(&a, &b).is_none());
        }
    }
}
