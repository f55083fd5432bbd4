//! Client for league data published on braacket.com: fuzzy player search,
//! player statistics, ranking tables and head-to-head comparisons.
//!
//! The site exposes no API, so everything is extracted from its HTML pages.
//! Entry point is [`LeagueClient`].

pub mod model;
pub mod service;

pub use model::head_to_head::{HeadToHead, RecentMatch};
pub use model::ids::PlayerId;
pub use model::player::{MatchCandidate, PlayerDirectory, PlayerEntry};
pub use model::ranking::{Main, RankingEntry};
pub use model::stats::{Performance, PlayerStats, Rank, RankingInfo};
pub use service::league::{DataRetrievalError, DataRetrievalResult, LeagueClient};
pub use service::webapi::client::{ClientInitError, RequestError};
pub use service::webapi::parsing::ParsingError;
