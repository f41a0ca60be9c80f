/*
 * Responsibility
 * - API キーの抽出 (ヘッダ抽出 → フォーマット検証 → 拒否)
 * - 成功時に ApiKey を request extensions に載せ、handler 側の extractor に渡す
 * - キー自体の認証 (ストア照合) は handler/service 側で行う
 */
use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::ApiError;
use crate::extract::ApiKey;
use crate::services::auth::extract_api_key;

/// 保護したい Router に API キー抽出の middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/posts", get(list_posts));
/// let protected = middleware::api_key::apply(protected);
/// app = app.nest("/api/v1", protected);
/// ```
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(require_api_key))
}

async fn require_api_key(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let key = match extract_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(error = ?err, "api key extraction failed");
            return Err(err.into());
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ApiKey(key));

    Ok(next.run(req).await)
}
