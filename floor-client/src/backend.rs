//! Persistence backend abstraction
//!
//! The editor talks to the backend through [`FloorPlanBackend`] so sessions can
//! run against the HTTP client or an in-memory store in tests.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::{AvailabilityQuery, FloorPlan, NormalizedItem, PublicTable, ResizeRequest};

#[async_trait]
pub trait FloorPlanBackend: Send + Sync {
    /// Load the current floor plan
    async fn fetch_plan(&self) -> ClientResult<FloorPlan>;

    /// Replace the full item set of a plan. All-or-nothing.
    async fn replace_items(&self, plan_id: i64, items: &[NormalizedItem]) -> ClientResult<()>;

    /// Persist new grid dimensions
    async fn resize(&self, plan_id: i64, request: ResizeRequest) -> ClientResult<()>;

    /// Read the availability feed
    async fn fetch_availability(&self, query: &AvailabilityQuery) -> ClientResult<Vec<PublicTable>>;
}

#[async_trait]
impl FloorPlanBackend for HttpClient {
    async fn fetch_plan(&self) -> ClientResult<FloorPlan> {
        self.fetch_floor_plan().await
    }

    async fn replace_items(&self, plan_id: i64, items: &[NormalizedItem]) -> ClientResult<()> {
        HttpClient::replace_items(self, plan_id, items).await
    }

    async fn resize(&self, plan_id: i64, request: ResizeRequest) -> ClientResult<()> {
        self.resize_plan(plan_id, request).await
    }

    async fn fetch_availability(&self, query: &AvailabilityQuery) -> ClientResult<Vec<PublicTable>> {
        HttpClient::fetch_availability(self, query).await
    }
}
