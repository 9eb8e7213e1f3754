// SPDX-License-Identifier: MPL-2.0
//! Read-only client for the Pokémon TCG REST API.
//!
//! Every operation is a single `GET` (or a set of independent `GET`s run in
//! parallel) returning typed models. Failures are logged here, at the call
//! site, and handed back to the caller unclassified beyond [`Error`]; there
//! is no retry and no response caching.
//!
//! The client is cheap to clone (the underlying connection pool is shared),
//! so screens clone it into each `Task::perform` future.

pub mod models;
pub mod query;

pub use models::{Card, CardSet, Page};
pub use query::Filters;

use crate::app::config::ApiConfig;
use crate::error::{Error, Result};
use futures_util::future::{try_join3, try_join_all};
use models::{ItemResponse, ListResponse};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Option lists backing the filter panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub sets: Vec<CardSet>,
    pub types: Vec<String>,
    pub rarities: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Builds a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("invalid api base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "api base_url cannot carry a path: {}",
                config.base_url
            )));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let value = reqwest::header::HeaderValue::from_str(key)
                .map_err(|e| Error::Config(format!("invalid api_key: {e}")))?;
            headers.insert("X-Api-Key", value);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs.into()))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Resolves `segments` below the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self.http.get(url).query(params).send().await?;
        check_status(operation, response.status())?;
        Ok(response.json::<T>().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments);
        tracing::debug!(operation, %url, "catalog request");
        self.fetch_json(operation, url, params).await.inspect_err(|error| {
            tracing::error!(operation, %error, "catalog request failed");
        })
    }

    /// One page of cards, newest sets first, narrowed by `filters`.
    pub async fn cards(&self, page: u32, page_size: u32, filters: &Filters) -> Result<Page<Card>> {
        let params = query::card_list_params(page, page_size, filters);
        let response: ListResponse<Card> = self.get_json("cards", &["cards"], &params).await?;
        Ok(response.into())
    }

    /// A single card by identifier.
    ///
    /// `None` when the API answers with a null or empty `data` payload.
    pub async fn card(&self, id: &str) -> Result<Option<Card>> {
        let response: ItemResponse<Option<Card>> =
            self.get_json("card", &["cards", id], &[]).await?;
        Ok(response.data.filter(|card| !card.id.is_empty()))
    }

    /// Fetches every card in `ids` concurrently, preserving order.
    ///
    /// A single failed lookup fails the whole batch, and so does a card the
    /// API answers without.
    pub async fn cards_by_ids(&self, ids: &[String]) -> Result<Vec<Card>> {
        try_join_all(ids.iter().map(|id| async move {
            self.card(id).await.and_then(|card| {
                card.ok_or_else(|| {
                    tracing::error!(%id, "catalog has no card for a requested id");
                    Error::Http(format!("card {id}: not found"))
                })
            })
        }))
        .await
    }

    /// Every set, newest first.
    pub async fn sets(&self) -> Result<Vec<CardSet>> {
        let params = query::set_params(None);
        let response: ListResponse<CardSet> = self.get_json("sets", &["sets"], &params).await?;
        Ok(response.data)
    }

    /// One page of sets, newest first.
    pub async fn set_page(&self, page: u32, page_size: u32) -> Result<Page<CardSet>> {
        let params = query::set_params(Some((page, page_size)));
        let response: ListResponse<CardSet> =
            self.get_json("set_page", &["sets"], &params).await?;
        Ok(response.into())
    }

    pub async fn types(&self) -> Result<Vec<String>> {
        let response: ListResponse<String> = self.get_json("types", &["types"], &[]).await?;
        Ok(response.data)
    }

    pub async fn rarities(&self) -> Result<Vec<String>> {
        let response: ListResponse<String> =
            self.get_json("rarities", &["rarities"], &[]).await?;
        Ok(response.data)
    }

    /// Cards whose name contains `query`.
    pub async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<Page<Card>> {
        let params = query::search_params(query, page, page_size);
        let response: ListResponse<Card> = self.get_json("search", &["cards"], &params).await?;
        Ok(response.into())
    }

    /// Sets, types and rarities for the filter panel, fetched in parallel.
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        let (sets, types, rarities) = try_join3(self.sets(), self.types(), self.rarities()).await?;
        Ok(FilterOptions {
            sets,
            types,
            rarities,
        })
    }

    /// Raw bytes of a card or set image.
    pub async fn image(&self, url: &str) -> Result<Vec<u8>> {
        let result = async {
            let response = self.http.get(url).send().await?;
            check_status("image", response.status())?;
            Ok(response.bytes().await?.to_vec())
        }
        .await;

        result.inspect_err(|error| tracing::debug!(url, %error, "image request failed"))
    }
}

/// Non-2xx answers become [`Error::Http`] naming the operation and status.
fn check_status(operation: &str, status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Http(format!("{operation}: HTTP status {status}")))
    }
}
