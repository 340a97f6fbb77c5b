pub mod browser;
pub mod page;
pub mod renderer;

pub use crate::domain::model::{Business, Category, DisplayState, FilterCriteria};
pub use crate::domain::ports::{ConfigProvider, DirectoryApi};
pub use crate::utils::error::Result;
