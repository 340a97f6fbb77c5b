pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpDirectoryApi;
pub use config::BrowserSettings;
pub use crate::core::{
    browser::{DirectoryBrowser, LoadOutcome, UiEvent},
    renderer::{OutputFormat, ResultRenderer},
};
pub use utils::error::{BrowserError, Result};
