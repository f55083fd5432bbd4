use std::collections::HashMap;

/// League rank of a player. Unranked players show no ranking panel at all on
/// their page, so absence of the panel maps here rather than to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rank {
    Unranked,
    Ranked { rank: u32, suffix: String, out_of: u32 },
}

#[derive(Debug, Clone)]
pub struct RankingInfo {
    pub rank: Rank,
    /// Raw ranking score, when the page renders a "Score" sub-panel.
    pub score: Option<i64>,
    /// Remaining sub-panel fields keyed by lower-cased label: ranking type,
    /// date range, activity requirement, whatever else the site adds.
    pub fields: HashMap<String, String>,
    /// Set when the activity-requirement warning marker is present.
    pub inactive: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Performance {
    pub win_rate: Option<f64>,
    /// Lower-cased stat label -> value: wins, draws, losses, +, -, +/-,
    /// placement tiers and so on, depending on what the page renders.
    pub stats: HashMap<String, i64>,
}

#[derive(Debug, Clone)]
pub struct PlayerStats {
    pub tag: String,
    pub ranking: RankingInfo,
    pub performance: Performance,
}
