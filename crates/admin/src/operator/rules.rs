//! The ordered rule table. Earlier rules win.

use std::sync::LazyLock;

use regex::Regex;

use super::Intent;

/// One way a rule can fire.
#[derive(Debug)]
pub enum Test {
    /// Input contains the phrase.
    Contains(&'static str),
    /// Input matches; the first capture group is the lookup key.
    Pattern(Regex),
}

/// What fired a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit<'a> {
    Keyword,
    Capture(&'a str),
}

/// A disjunction of tests mapped to an intent.
#[derive(Debug)]
pub struct Rule {
    pub intent: Intent,
    tests: Vec<Test>,
}

impl Rule {
    fn keywords(intent: Intent, phrases: &[&'static str]) -> Self {
        Self {
            intent,
            tests: phrases.iter().copied().map(Test::Contains).collect(),
        }
    }

    fn patterns(intent: Intent, patterns: &[&str]) -> Self {
        Self {
            intent,
            tests: patterns
                .iter()
                .map(|p| Test::Pattern(Regex::new(p).expect("Invalid regex")))
                .collect(),
        }
    }

    /// The first test that fires against lowercased input.
    #[must_use]
    pub fn fire<'a>(&self, input: &'a str) -> Option<Hit<'a>> {
        self.tests.iter().find_map(|test| match test {
            Test::Contains(phrase) => input.contains(phrase).then_some(Hit::Keyword),
            Test::Pattern(re) => re
                .captures(input)
                .and_then(|caps| caps.get(1))
                .map(|m| Hit::Capture(m.as_str())),
        })
    }
}

/// Rules in priority order.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::keywords(
            Intent::TicketList,
            &["show ticket", "list ticket", "view ticket", "open ticket"],
        ),
        Rule::patterns(
            Intent::TicketLookup,
            &[r"ticket[- ](\d+)", r"ticket[- ]([a-z0-9-]+)"],
        ),
        Rule::keywords(
            Intent::UserList,
            &["show user", "list user", "view user", "all user"],
        ),
        Rule::keywords(
            Intent::UserLookup,
            &["find user", "search user", "lookup user"],
        ),
        Rule::keywords(
            Intent::LocationList,
            &[
                "show location",
                "list location",
                "view location",
                "all location",
                "laundromat",
            ],
        ),
        Rule::patterns(Intent::LocationLookup, &[r"location (?:named|called) ([a-z &]+)"]),
        Rule::keywords(
            Intent::SystemStatus,
            &["system status", "status", "health", "system health"],
        ),
        Rule::keywords(
            Intent::Performance,
            &["performance", "metrics", "analytics", "stats", "statistics"],
        ),
        Rule::keywords(Intent::Help, &["help", "what can you do", "commands"]),
        Rule::keywords(
            Intent::Logs,
            &["logs", "system logs", "error logs", "activity logs"],
        ),
    ]
});

static USER_NAMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"user (?:named|called|with name) ([a-z ]+)").expect("Invalid regex")
});

static USER_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"user (?:with email|email) ([a-z0-9.@]+)").expect("Invalid regex")
});

static USER_REST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:find|search|lookup) user\s+(.+)").expect("Invalid regex"));

/// The name or email a user lookup asks for, if any.
#[must_use]
pub fn user_query(input: &str) -> Option<&str> {
    [&USER_NAMED, &USER_EMAIL, &USER_REST]
        .into_iter()
        .find_map(|re| re.captures(input).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str().trim())
        .filter(|query| !query.is_empty())
}
