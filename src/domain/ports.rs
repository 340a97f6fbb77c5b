use crate::domain::model::{Business, Category, FilterCriteria};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>>;
    async fn fetch_businesses(&self, criteria: &FilterCriteria) -> Result<Vec<Business>>;
    async fn fetch_business(&self, id: i64) -> Result<Business>;
}
