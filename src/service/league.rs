use std::collections::HashMap;
use std::fmt;

use log::debug;
use once_cell::sync::OnceCell;

use crate::model::{
    head_to_head::HeadToHead,
    ids::PlayerId,
    player::{MatchCandidate, PlayerDirectory},
    ranking::RankingEntry,
    stats::PlayerStats,
};

use super::search;
use super::webapi::{
    client::{ApiClient, ClientInitError, PageRequest, RequestError},
    parsing::{
        directory::parse_player_listing, head_to_head::parse_head_to_head,
        league::parse_league_name, player::parse_player_page, ranking::parse_ranking,
        ParsingError,
    },
};

/// Client for one league on the ranking site. Owns the player directory,
/// which is built lazily from the listing page and only replaced wholesale by
/// `refresh_directory`. Everything else is fetched per call.
pub struct LeagueClient {
    client: ApiClient,
    directory: OnceCell<PlayerDirectory>,
}

impl LeagueClient {
    pub fn new(league: &str) -> Result<Self, ClientInitError> {
        Self::with_options(league, false)
    }

    /// `verify_tls` turns certificate validation back on; see `ApiClient`.
    pub fn with_options(league: &str, verify_tls: bool) -> Result<Self, ClientInitError> {
        Ok(Self {
            client: ApiClient::new(league, verify_tls)?,
            directory: OnceCell::new(),
        })
    }

    pub fn directory(&self) -> DataRetrievalResult<&PlayerDirectory> {
        self.directory.get_or_try_init(|| self.retrieve_directory())
    }

    /// Rebuilds the directory from the current upstream listing, replacing
    /// the previous mapping in one step.
    pub fn refresh_directory(&mut self) -> DataRetrievalResult<()> {
        let directory = self.retrieve_directory()?;
        self.directory = OnceCell::from(directory);
        Ok(())
    }

    /// Top matches for a (possibly misspelled) tag, best first. Builds the
    /// directory on first use.
    pub fn search_player(&self, tag: &str) -> DataRetrievalResult<Vec<MatchCandidate>> {
        Ok(search::rank_players(tag, self.directory()?))
    }

    pub fn league_name(&self) -> DataRetrievalResult<String> {
        let html = self.client.request(&PageRequest::League)?;
        Ok(parse_league_name(&html)?)
    }

    pub fn ranking(&self) -> DataRetrievalResult<HashMap<PlayerId, RankingEntry>> {
        let html = self.client.request(&PageRequest::Ranking)?;
        Ok(parse_ranking(&html)?)
    }

    pub fn player_stats(&self, id: &PlayerId) -> DataRetrievalResult<PlayerStats> {
        let html = self.client.request(&PageRequest::Player(id.clone()))?;
        Ok(parse_player_page(&html)?)
    }

    pub fn head_to_head(
        &self,
        first: &PlayerId,
        second: &PlayerId,
    ) -> DataRetrievalResult<HeadToHead> {
        let html = self
            .client
            .request(&PageRequest::HeadToHead(first.clone(), second.clone()))?;
        Ok(parse_head_to_head(&html)?)
    }

    fn retrieve_directory(&self) -> DataRetrievalResult<PlayerDirectory> {
        let html = self.client.request(&PageRequest::PlayerListing)?;
        let directory = parse_player_listing(&html)?;
        debug!("player directory built with {} entries", directory.len());
        Ok(directory)
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataRetrievalError {
    ClientFailed(RequestError),
    ParsingFailed(ParsingError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::ClientFailed(err) => write!(f, "Client error: {}", err),
            DataRetrievalError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<RequestError> for DataRetrievalError {
    fn from(error: RequestError) -> Self {
        Self::ClientFailed(error)
    }
}

impl From<ParsingError> for DataRetrievalError {
    fn from(error: ParsingError) -> Self {
        Self::ParsingFailed(error)
    }
}
