use crate::core::page::Page;
use crate::core::renderer::{DetailView, OutputFormat, ResultRenderer, LOAD_FAILED_MESSAGE};
use crate::domain::model::{DisplayState, FilterCriteria};
use crate::domain::ports::DirectoryApi;
use crate::utils::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// User interactions the browser reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CategoryChanged(String),
    /// Typing into the search field; never issues a request on its own.
    SearchInput(String),
    SearchClicked,
    /// A key pressed while the search field has focus.
    SearchKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Displayed { count: usize },
    Failed,
    /// A newer load was issued before this one resolved; its result was dropped.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub categories_added: usize,
    pub businesses: LoadOutcome,
}

/// Coordinates category loading, business loading and rendering for one page.
///
/// The page is the only mutable state. Each business load takes a request
/// token; a response is applied only while its token is still the latest,
/// so the display always follows the most recent request even when responses
/// arrive out of order.
pub struct DirectoryBrowser<A: DirectoryApi> {
    api: A,
    renderer: ResultRenderer,
    page: Mutex<Page>,
    latest_request: AtomicU64,
}

impl<A: DirectoryApi> DirectoryBrowser<A> {
    pub fn new(api: A, renderer: ResultRenderer) -> Self {
        Self {
            api,
            renderer,
            page: Mutex::new(Page::new()),
            latest_request: AtomicU64::new(0),
        }
    }

    fn page_mut(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn renderer(&self) -> &ResultRenderer {
        &self.renderer
    }

    /// Snapshot of the current page.
    pub fn page(&self) -> Page {
        self.page_mut().clone()
    }

    pub fn state(&self) -> DisplayState {
        self.page_mut().state().clone()
    }

    pub fn render(&self, format: OutputFormat) -> String {
        self.page_mut().render(&self.renderer, format)
    }

    /// Sets control values without firing any event.
    pub fn set_controls(&self, category: &str, search: &str) {
        let mut page = self.page_mut();
        page.select_category(category);
        page.set_search_text(search);
    }

    /// Loads categories and the business list concurrently.
    pub async fn activate(&self) -> Activation {
        tracing::info!("Activating directory browser");
        let criteria = self.page_mut().filter_criteria();
        let (categories_added, businesses) =
            tokio::join!(self.load_categories(), self.load_businesses(criteria));

        Activation {
            categories_added,
            businesses,
        }
    }

    /// Appends the backend's categories to the selector. Failures are logged
    /// and leave the selector as it was.
    pub async fn load_categories(&self) -> usize {
        match self.api.fetch_categories().await {
            Ok(categories) => {
                let added = self.page_mut().append_categories(&categories);
                tracing::debug!(
                    "Loaded {} categories ({} new options)",
                    categories.len(),
                    added
                );
                added
            }
            Err(e) => {
                tracing::error!("Error loading categories: {}", e);
                0
            }
        }
    }

    pub async fn load_businesses(&self, criteria: FilterCriteria) -> LoadOutcome {
        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.page_mut().set_state(DisplayState::Loading);
        tracing::debug!("Business request #{} with {:?}", token, criteria);

        let result = self.api.fetch_businesses(&criteria).await;

        let mut page = self.page_mut();
        if self.latest_request.load(Ordering::SeqCst) != token {
            tracing::debug!("Discarding response for superseded request #{}", token);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(businesses) => {
                let count = businesses.len();
                tracing::info!("Displaying {} businesses", count);
                page.set_state(DisplayState::Displayed(businesses));
                LoadOutcome::Displayed { count }
            }
            Err(e) => {
                tracing::error!(
                    "Error loading businesses: {} (Category: {:?})",
                    e,
                    e.category()
                );
                page.set_state(DisplayState::Error(LOAD_FAILED_MESSAGE.to_string()));
                LoadOutcome::Failed
            }
        }
    }

    /// Re-runs the business query from the current control values.
    pub async fn filter(&self) -> LoadOutcome {
        let criteria = self.page_mut().filter_criteria();
        self.load_businesses(criteria).await
    }

    /// Applies `event` to the page. Returns the load outcome when the event
    /// triggered a business query.
    pub async fn handle_event(&self, event: UiEvent) -> Option<LoadOutcome> {
        match event {
            UiEvent::CategoryChanged(value) => {
                self.page_mut().select_category(value);
                Some(self.filter().await)
            }
            UiEvent::SearchInput(text) => {
                self.page_mut().set_search_text(text);
                None
            }
            UiEvent::SearchClicked => Some(self.filter().await),
            UiEvent::SearchKey(key) if key == "Enter" => Some(self.filter().await),
            UiEvent::SearchKey(_) => None,
        }
    }

    pub async fn show_business(&self, id: i64) -> Result<DetailView> {
        let business = self.api.fetch_business(id).await?;
        Ok(self.renderer.render_detail(&business))
    }
}
