//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{
    AvailabilityQuery, CommitItemsRequest, FloorPlan, NormalizedItem, PublicTable, ResizeRequest,
};

/// HTTP client for making requests to the floor plan backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: serde::Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body, ignoring the response body
    pub async fn put<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Map non-success statuses to client errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), body = %text, "Backend returned an error");
        Err(ClientError::from_status(status, text))
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Floor Plan API ==========

    /// Fetch the current floor plan with all its items
    pub async fn fetch_floor_plan(&self) -> ClientResult<FloorPlan> {
        let plan: FloorPlan = self.get("/api/floor-plan").await?;
        tracing::debug!(plan_id = plan.id, items = plan.items.len(), "Fetched floor plan");
        Ok(plan)
    }

    /// Replace the item set of a plan
    pub async fn replace_items(&self, plan_id: i64, items: &[NormalizedItem]) -> ClientResult<()> {
        let body = CommitItemsRequest {
            items: items.to_vec(),
        };
        self.put(&format!("/api/floor-plan/{}/items", plan_id), &body)
            .await
    }

    /// Change the grid dimensions of a plan
    pub async fn resize_plan(&self, plan_id: i64, request: ResizeRequest) -> ClientResult<()> {
        self.put(&format!("/api/floor-plan/{}", plan_id), &request)
            .await
    }

    /// Read the availability feed
    pub async fn fetch_availability(&self, query: &AvailabilityQuery) -> ClientResult<Vec<PublicTable>> {
        self.get_with_query("/api/public/tables", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://pos.local/")).unwrap();
        assert_eq!(client.url("/api/floor-plan"), "http://pos.local/api/floor-plan");
        assert_eq!(client.url("api/floor-plan"), "http://pos.local/api/floor-plan");
    }

    #[test]
    fn test_with_token_overrides_config() {
        let client = HttpClient::new(&ClientConfig::default())
            .unwrap()
            .with_token("t1");
        assert_eq!(client.token(), Some("t1"));
    }
}
