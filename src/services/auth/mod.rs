pub mod api_key;

pub use api_key::{ApiKeyError, extract_api_key};
