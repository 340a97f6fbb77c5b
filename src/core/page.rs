use crate::core::renderer::{escape_html, OutputFormat, ResultRenderer};
use crate::domain::model::{Category, DisplayState, FilterCriteria, SelectOption};
use std::collections::HashSet;
use std::fmt::Write;

pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// The browser's page: category selector, search field and display region.
///
/// Control values are stored as typed, exactly like form controls; trimming
/// happens when a [`FilterCriteria`] is read from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    category_options: Vec<SelectOption>,
    selected_category: String,
    search_text: String,
    state: DisplayState,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            category_options: vec![SelectOption {
                value: String::new(),
                label: ALL_CATEGORIES_LABEL.to_string(),
            }],
            selected_category: String::new(),
            search_text: String::new(),
            state: DisplayState::Idle,
        }
    }

    pub fn category_options(&self) -> &[SelectOption] {
        &self.category_options
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Appends one option per category in the given order. Categories whose
    /// id was already an option before this call are skipped. Returns how
    /// many were added.
    pub fn append_categories(&mut self, categories: &[Category]) -> usize {
        let existing: HashSet<String> = self
            .category_options
            .iter()
            .map(|o| o.value.clone())
            .collect();
        let mut added = 0;
        for category in categories {
            let value = category.id.to_string();
            if existing.contains(&value) {
                continue;
            }
            self.category_options.push(SelectOption {
                value,
                label: category.name.clone(),
            });
            added += 1;
        }
        added
    }

    pub fn select_category(&mut self, value: impl Into<String>) {
        self.selected_category = value.into();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_state(&mut self, state: DisplayState) {
        self.state = state;
    }

    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.selected_category, &self.search_text)
    }

    fn selected_label(&self) -> &str {
        self.category_options
            .iter()
            .find(|o| o.value == self.selected_category)
            .map(|o| o.label.as_str())
            .unwrap_or(self.selected_category.as_str())
    }

    pub fn render(&self, renderer: &ResultRenderer, format: OutputFormat) -> String {
        let region = renderer.render_state(&self.state);
        match format {
            OutputFormat::Text => {
                let mut text = format!(
                    "Category: {}\nSearch:   {}\n\n",
                    self.selected_label(),
                    self.search_text.trim()
                );
                text.push_str(&region.to_text());
                text
            }
            OutputFormat::Html => {
                let mut html = String::from(
                    "<div class=\"row mb-4\">\
                     <select id=\"category-filter\" class=\"form-select\">",
                );
                for option in &self.category_options {
                    let selected = if option.value == self.selected_category {
                        " selected"
                    } else {
                        ""
                    };
                    let _ = write!(
                        html,
                        "<option value=\"{}\"{}>{}</option>",
                        escape_html(&option.value),
                        selected,
                        escape_html(&option.label)
                    );
                }
                let _ = write!(
                    html,
                    "</select>\
                     <input id=\"search-input\" type=\"text\" class=\"form-control\" value=\"{}\">\
                     <button id=\"search-button\" class=\"btn btn-primary\">Search</button></div>\
                     <div id=\"businesses-container\" class=\"row\">{}</div>",
                    escape_html(&self.search_text),
                    region.to_html()
                );
                html
            }
        }
    }
}
