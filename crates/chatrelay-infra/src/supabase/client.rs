//! Minimal PostgREST client for the Supabase data API.
//!
//! Requests go to `{SUPABASE_URL}/rest/v1/<table>` with `apikey` and
//! bearer authorization headers. The chained [`Query`] builder covers the
//! small slice of PostgREST this service uses: equality filters,
//! descending order, limit, insert-with-representation, and delete.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;

use chatrelay_types::error::{ConfigError, RepositoryError};

use crate::config::SupabaseConfig;

/// HTTP client for the Supabase data API.
///
/// Cheap to clone; the underlying reqwest client is shared and owns the
/// connection pool for the whole process.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
}

impl SupabaseClient {
    /// Create a client from the given configuration.
    ///
    /// The API key is attached to every request as both `apikey` and
    /// `Authorization: Bearer` headers, marked sensitive so it is never
    /// logged.
    pub fn new(config: &SupabaseConfig) -> Result<Self, ConfigError> {
        let key = config.key.expose_secret();

        let mut api_key = HeaderValue::from_str(key)
            .map_err(|_| ConfigError::InvalidVar("SUPABASE_KEY"))?;
        api_key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| ConfigError::InvalidVar("SUPABASE_KEY"))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", config.url),
        })
    }

    /// Start a query against a table.
    pub fn table(&self, table: &str) -> Query<'_> {
        Query {
            client: self,
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }
}

/// A single PostgREST request under construction.
#[must_use]
pub struct Query<'a> {
    client: &'a SupabaseClient,
    table: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl Query<'_> {
    /// Add an equality filter (`column=eq.value`).
    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Order results by a column, descending.
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn url(&self) -> String {
        format!("{}/{}", self.client.rest_url, self.table)
    }

    fn params(&self, with_select: bool) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if with_select {
            params.push(("select".to_string(), "*".to_string()));
        }
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }

    /// Execute as a select, deserializing the returned rows.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, RepositoryError> {
        let response = self
            .client
            .http
            .get(self.url())
            .query(&self.params(true))
            .send()
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        let response = expect_success(&self.table, response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| RepositoryError::Query(format!("{}: invalid response body: {e}", self.table)))
    }

    /// Insert a row and return the stored representation, including
    /// store-assigned columns.
    pub async fn insert<T: DeserializeOwned>(
        self,
        row: &impl Serialize,
    ) -> Result<Vec<T>, RepositoryError> {
        let response = self
            .client
            .http
            .post(self.url())
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        let response = expect_success(&self.table, response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| RepositoryError::Query(format!("{}: invalid response body: {e}", self.table)))
    }

    /// Delete the rows matched by the filters. The number of affected
    /// rows is not reported.
    pub async fn delete(self) -> Result<(), RepositoryError> {
        let response = self
            .client
            .http
            .delete(self.url())
            .query(&self.params(false))
            .send()
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        expect_success(&self.table, response).await?;
        Ok(())
    }
}

async fn expect_success(
    table: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, RepositoryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(table, %status, "Supabase request failed");
    Err(RepositoryError::Query(format!("{table}: {status}: {body}")))
}
