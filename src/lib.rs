/*
 * Responsibility
 * - crate root (モジュール宣言と再エクスポートのみ、ロジックは置かない)
 * - HTTP 層からの入口は extract_api_key / ApiKey / middleware::api_key::apply
 */
pub mod error;
pub mod extract;
pub mod middleware;
pub mod services;

pub use error::ApiError;
pub use extract::ApiKey;
pub use services::auth::{ApiKeyError, extract_api_key};
