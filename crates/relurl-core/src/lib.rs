pub mod config;
pub mod logging;

pub mod url_model;

pub use url_model::{RelativeUrl, SearchData, SearchValue, UrlError, UrlProperties};
