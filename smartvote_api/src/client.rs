//! HTTP client for the smartvote API.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    pacer::{Pacer, TokioPacer},
    query::{CandidateQuery, ListQuery, PartyQuery, Query, ResponderQuery},
    types::{
        CandidateID, ConstituencyID, ElectionID, ListID, PartyID, Resource, Resources,
        TokenResponse,
    },
    Error,
};

const API_VERSION: &str = "/2.0";
const TOKEN_PATH: &str = "/auth/token";
const AUTH_HEADER: &str = "x-auth-token";
const LANGUAGE_PARAM: &str = "lang";
const USER_AGENT: &str = concat!("smartvote_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for one election in one language.
///
/// Construction fetches an authentication token, which is then sent as the
/// `x-auth-token` header on every request. When the API answers 401 the
/// token is fetched again and the request retried once.
///
/// Request methods take `&mut self` since a retry may replace the token.
/// Clients share nothing, so build one per language or per task.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
    pacer: Arc<dyn Pacer>,
}

impl Client {
    /// Creates a client and fetches its first token.
    pub async fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_pacer(config, Arc::new(TokioPacer)).await
    }

    /// Creates a client that waits out the configured delay through `pacer`.
    pub async fn with_pacer(mut config: ClientConfig, pacer: Arc<dyn Pacer>) -> Result<Self, Error> {
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        let mut client = Self {
            http,
            config,
            token: None,
            pacer,
        };
        client.refresh_token().await?;
        Ok(client)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn election_id(&self) -> ElectionID {
        self.config.election_id
    }

    pub fn language(&self) -> &str {
        &self.config.language
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }

    /// The token currently attached to requests.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn get_url(&self, path: &str, params: &[(String, String)]) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.config.api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;

        let mut merged = vec![(LANGUAGE_PARAM.to_string(), self.config.language.clone())];
        for (key, value) in params {
            match merged.iter_mut().find(|(existing, _)| existing == key) {
                Some(pair) => pair.1 = value.clone(),
                None => merged.push((key.clone(), value.clone())),
            }
        }
        url.query_pairs_mut().extend_pairs(&merged);
        Ok(url)
    }

    /// Sends a single attempt and reads the whole body.
    async fn send(
        &self,
        method: &Method,
        url: &Url,
        body: Option<&Value>,
    ) -> Result<(StatusCode, String), Error> {
        tracing::debug!("{} {}", method, url);
        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header("accept", "application/json");
        if let Some(token) = &self.token {
            builder = builder.header(AUTH_HEADER, token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to get resource {}: {}", url.path(), e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;
        Ok((status, text))
    }

    /// Checks the status, paces, then decodes.
    async fn finish<T: DeserializeOwned>(&self, status: StatusCode, body: String) -> Result<T, Error> {
        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        if !self.config.delay.is_zero() {
            self.pacer.pause(self.config.delay).await;
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Cannot parse response: {} | body: {}", e, body);
            Error::Parse { source: e, body }
        })
    }

    /// Fetches a fresh token and attaches it to all later requests.
    ///
    /// Goes through a single attempt only: a 401 from the token endpoint is
    /// an ordinary HTTP error.
    async fn refresh_token(&mut self) -> Result<(), Error> {
        let url = self.get_url(TOKEN_PATH, &[])?;
        let (status, body) = self.send(&Method::GET, &url, None).await?;
        let response: TokenResponse = self.finish(status, body).await?;
        tracing::info!(
            "Fetched API token for election {}",
            self.config.election_id
        );
        self.token = Some(response.token);
        Ok(())
    }

    /// Sends a request to `path` and decodes the JSON response.
    ///
    /// `lang` is always added to the query; `params` are appended and only
    /// replace it when they carry the same key. On a 401 the token is
    /// refreshed and the request sent again, once.
    pub async fn request<T: DeserializeOwned>(
        &mut self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let url = self.get_url(path, params)?;
        let (mut status, mut text) = self.send(&method, &url, body).await?;
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Token rejected for {} {}, refreshing", method, url.path());
            self.refresh_token().await?;
            (status, text) = self.send(&method, &url, body).await?;
        }
        self.finish(status, text).await
    }

    async fn get<T: DeserializeOwned>(
        &mut self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, Error> {
        self.request(Method::GET, path, params, None).await
    }

    fn election_path(&self, suffix: &str) -> String {
        format!(
            "{}/elections/{}{}",
            API_VERSION, self.config.election_id, suffix
        )
    }

    /// Fetches the languages the API can respond in.
    pub async fn get_languages(&mut self) -> Result<Resources, Error> {
        self.get(format!("{}/languages", API_VERSION).as_str(), &[])
            .await
    }

    /// Fetches the configured election.
    pub async fn get_election(&mut self) -> Result<Resource, Error> {
        let path = self.election_path("");
        self.get(&path, &[]).await
    }

    /// Fetches summary statistics for the configured election.
    pub async fn get_election_statistics(&mut self) -> Result<Resource, Error> {
        let path = self.election_path("/statistics");
        self.get(&path, &[]).await
    }

    /// Fetches all constituencies of the election.
    pub async fn get_constituencies(&mut self) -> Result<Resources, Error> {
        let path = self.election_path("/constituencies");
        self.get(&path, &[]).await
    }

    /// Fetches a single constituency by its ID.
    pub async fn get_constituency(
        &mut self,
        constituency_id: ConstituencyID,
    ) -> Result<Resource, Error> {
        let path = self.election_path(format!("/constituencies/{}", constituency_id).as_str());
        self.get(&path, &[]).await
    }

    /// Fetches summary statistics for one constituency.
    pub async fn get_constituency_statistics(
        &mut self,
        constituency_id: ConstituencyID,
    ) -> Result<Resource, Error> {
        let path = self.election_path(
            format!("/constituencies/{}/statistics", constituency_id).as_str(),
        );
        self.get(&path, &[]).await
    }

    /// Fetches parties, by default root parties only.
    pub async fn get_parties(&mut self, query: &PartyQuery) -> Result<Resources, Error> {
        let path = self.election_path("/parties");
        self.get(&path, &query.to_query_pairs()).await
    }

    /// Fetches a single party by its ID.
    pub async fn get_party(&mut self, party_id: PartyID) -> Result<Resource, Error> {
        let path = self.election_path(format!("/parties/{}", party_id).as_str());
        self.get(&path, &[]).await
    }

    /// Fetches candidate lists matching the given query.
    pub async fn get_lists(&mut self, query: &ListQuery) -> Result<Resources, Error> {
        let path = self.election_path("/lists");
        self.get(&path, &query.to_query_pairs()).await
    }

    /// Fetches a single candidate list by its ID.
    pub async fn get_list(&mut self, list_id: ListID) -> Result<Resource, Error> {
        let path = self.election_path(format!("/lists/{}", list_id).as_str());
        self.get(&path, &[]).await
    }

    /// Fetches candidates matching the given query.
    pub async fn get_candidates(&mut self, query: &CandidateQuery) -> Result<Resources, Error> {
        let path = self.election_path("/candidates");
        self.get(&path, &query.to_query_pairs()).await
    }

    /// Fetches a single candidate by its ID.
    pub async fn get_candidate(&mut self, candidate_id: CandidateID) -> Result<Resource, Error> {
        let path = self.election_path(format!("/candidates/{}", candidate_id).as_str());
        self.get(&path, &[]).await
    }

    /// Fetches the election's questionnaire. Its shape varies per election.
    pub async fn get_questionnaire(&mut self) -> Result<Value, Error> {
        let path = self.election_path("/questionnaires");
        self.get(&path, &[]).await
    }

    /// Fetches smartspider profiles, optionally for one candidate or list.
    pub async fn get_smartspider(&mut self, query: &ResponderQuery) -> Result<Resources, Error> {
        let path = self.election_path("/smartspiders");
        self.get(&path, &query.to_query_pairs()).await
    }

    /// Fetches questionnaire answers, optionally for one candidate or list.
    pub async fn get_answers(&mut self, query: &ResponderQuery) -> Result<Resources, Error> {
        let path = self.election_path("/answers");
        self.get(&path, &query.to_query_pairs()).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
