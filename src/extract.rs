/*
 * Responsibility
 * - handler 引数用の ApiKey extractor (FromRequestParts)
 * - middleware 経由なら extensions に入った値を再利用、単体でもヘッダから抽出できる
 */
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::services::auth::extract_api_key;

/// リクエストから取り出した API キー。フォーマット検証済み、認証はまだ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // middleware → extractor への受け渡し
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        let key = extract_api_key(&parts.headers)?;
        Ok(Self(key))
    }
}
