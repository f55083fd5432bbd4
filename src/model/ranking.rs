/// A character a player mains, as shown in the ranking table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Main {
    pub name: String,
    pub icon: String,
}

/// One row of the league ranking table. Rank and score are kept as the raw
/// display strings; the site formats them differently per ranking system.
#[derive(Debug, Clone)]
pub struct RankingEntry {
    pub name: String,
    pub rank: String,
    pub mains: Vec<Main>,
    pub twitter: Option<String>,
    pub score: String,
}
