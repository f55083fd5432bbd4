use std::collections::HashMap;

/// Most recent meeting of the two compared players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentMatch {
    /// The pair has no recorded matches against each other.
    NoMatches,
    Match {
        /// Tournament name.
        name: String,
        /// Set score, e.g. "1-2".
        score: String,
        date: String,
    },
}

#[derive(Debug, Clone)]
pub struct HeadToHead {
    /// Lower-cased stat label -> value: win, draw, lose, +, -, +/- and
    /// whatever else the compare panel renders.
    pub stats: HashMap<String, i64>,
    pub recent: RecentMatch,
}
