use std::fmt;

use log::debug;
use reqwest::{blocking::Client, StatusCode};

use crate::model::ids::PlayerId;

const BASE_URL: &str = "https://www.braacket.com";

/// Upstream caps listing pages at 200 rows per request.
const MAX_ROWS: u32 = 200;

pub struct ApiClient {
    client: Client,
    league: String,
}

impl ApiClient {
    /// `league` is the opaque path segment naming the league, e.g. "NCMelee".
    ///
    /// Certificate validation is off unless `verify_tls` is set; the site has
    /// served broken certificate chains in the past and the original tooling
    /// always fetched with verification disabled.
    pub fn new(league: &str, verify_tls: bool) -> Result<Self, ClientInitError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;
        Ok(Self {
            client,
            league: league.to_string(),
        })
    }

    /// Fetches one page and returns its body. One blocking round trip, no
    /// retries, no timeout beyond reqwest's defaults.
    pub fn request(&self, request: &PageRequest) -> Result<String, RequestError> {
        let url = format!("{}{}", BASE_URL, request.path(&self.league));
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(RequestError::InvalidResponse(url, response.status()));
        }
        Ok(response.text()?)
    }
}

#[derive(Debug, Clone)]
pub enum PageRequest {
    PlayerListing,
    Ranking,
    League,
    Player(PlayerId),
    HeadToHead(PlayerId, PlayerId),
}

impl PageRequest {
    pub fn path(&self, league: &str) -> String {
        match self {
            PageRequest::PlayerListing => format!("/league/{}/player?rows={}", league, MAX_ROWS),
            PageRequest::Ranking => format!("/league/{}/ranking?rows={}&embed=1", league, MAX_ROWS),
            PageRequest::League => format!("/league/{}", league),
            PageRequest::Player(id) => format!("/league/{}/player/{}", league, id),
            PageRequest::HeadToHead(first, second) => {
                format!("/league/{}/player/{}?player_hth={}", league, first, second)
            }
        }
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    ClientFailed(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::ClientFailed(err) => write!(f, "Client could not be built: {}", err),
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientFailed(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    ClientFailed(reqwest::Error),
    InvalidResponse(String, StatusCode),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ClientFailed(err) => write!(f, "Request failed: {}", err),
            RequestError::InvalidResponse(url, status) => {
                write!(f, "The server returned {} for {}", status, url)
            }
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientFailed(error)
    }
}
