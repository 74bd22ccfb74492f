use std::fmt;

/// How a set of boolean results combines into one verdict.
///
/// Applied at two levels: across a rule's configured values (per-value
/// matches into a header verdict) and across a policy's rules (header
/// verdicts into the request decision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Every item must match
    All,
    /// At least one item must match
    One,
    /// No item may match
    None,
}

impl MatchType {
    /// Parses a configured match type.
    ///
    /// Surrounding whitespace and ASCII case are ignored. Returns `None` for
    /// anything other than `all`, `one` or `none`.
    ///
    /// # Examples
    ///
    /// ```
    /// use header_policy::MatchType;
    ///
    /// assert_eq!(MatchType::parse(" One "), Some(MatchType::One));
    /// assert_eq!(MatchType::parse("some"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            Some(MatchType::All)
        } else if s.eq_ignore_ascii_case("one") {
            Some(MatchType::One)
        } else if s.eq_ignore_ascii_case("none") {
            Some(MatchType::None)
        } else {
            None
        }
    }

    /// Combines `matched` successes out of `total` candidates into a verdict.
    ///
    /// `All` additionally requires at least one success, so an empty set
    /// never satisfies it.
    ///
    /// # Examples
    ///
    /// ```
    /// use header_policy::MatchType;
    ///
    /// assert!(MatchType::All.tally(2, 2));
    /// assert!(!MatchType::All.tally(1, 2));
    /// assert!(MatchType::One.tally(1, 2));
    /// assert!(MatchType::None.tally(0, 2));
    /// ```
    pub fn tally(self, matched: usize, total: usize) -> bool {
        match self {
            MatchType::All => matched > 0 && matched == total,
            MatchType::One => matched > 0,
            MatchType::None => matched == 0,
        }
    }

    /// Returns the canonical configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::All => "all",
            MatchType::One => "one",
            MatchType::None => "none",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single configured value is compared against an observed header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exact string equality (the fallback)
    Equals,
    /// The observed value contains the configured value
    Contains,
    /// The configured value is a regular expression found in the observed value
    Regex,
}

impl Strategy {
    /// Resolves the opt-in strategy flags of a rule.
    ///
    /// `contains` wins over `regex` when both are set; neither means equality.
    pub fn from_flags(contains: bool, regex: bool) -> Self {
        if contains {
            Strategy::Contains
        } else if regex {
            Strategy::Regex
        } else {
            Strategy::Equals
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Equals => write!(f, "equals"),
            Strategy::Contains => write!(f, "contains"),
            Strategy::Regex => write!(f, "regex"),
        }
    }
}
