use crate::domain::model::{Business, Category, FilterCriteria};
use crate::domain::ports::{ConfigProvider, DirectoryApi};
use crate::utils::error::{BrowserError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// [`DirectoryApi`] backed by the directory's JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpDirectoryApi {
    base_url: Url,
    client: Client,
}

impl HttpDirectoryApi {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut base_url = Url::parse(config.base_url())?;
        // join() would replace the last path segment otherwise
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn categories_url(&self) -> Result<Url> {
        Ok(self.base_url.join("api/categories")?)
    }

    pub fn businesses_url(&self, criteria: &FilterCriteria) -> Result<Url> {
        let mut url = self.base_url.join("api/businesses")?;
        let pairs = criteria.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    pub fn business_url(&self, id: i64) -> Result<Url> {
        Ok(self.base_url.join(&format!("api/businesses/{}", id))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl DirectoryApi for HttpDirectoryApi {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.get_json(self.categories_url()?).await
    }

    async fn fetch_businesses(&self, criteria: &FilterCriteria) -> Result<Vec<Business>> {
        self.get_json(self.businesses_url(criteria)?).await
    }

    async fn fetch_business(&self, id: i64) -> Result<Business> {
        let url = self.business_url(id)?;
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BrowserError::NotFound { id });
        }

        let body = response.error_for_status()?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
