use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A directory entry as returned by `/api/businesses`.
///
/// Only `id`, `name`, `category_name`, `description` and `image_url` feed the
/// result cards; the contact fields are shown by the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Business {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// `None` when the backend sent no image, a null or an empty string.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// The (category, search text) pair driving one business query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category_id: Option<String>,
    pub search_query: Option<String>,
}

impl FilterCriteria {
    pub fn new(category_id: &str, search_query: &str) -> Self {
        Self {
            category_id: non_blank(category_id),
            search_query: non_blank(search_query),
        }
    }

    /// Query parameters in wire order; absent criteria produce no pair.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(category_id) = &self.category_id {
            pairs.push(("category_id", category_id.as_str()));
        }
        if let Some(search) = &self.search_query {
            pairs.push(("search", search.as_str()));
        }
        pairs
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Displayed(Vec<Business>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}
