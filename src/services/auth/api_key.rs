/*
 * Responsibility
 * - Authorization ヘッダから API キーを取り出す (抽出 → scheme 検証 → 分類)
 * - 検証するのはフォーマットのみ。キー自体の認証 (ストア照合) は呼び出し側の責務
 * - 入力の HeaderMap は読むだけ。状態も持たないので並行呼び出しは自由
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// scheme トークン。大文字小文字を区別し、直後に空白ちょうど 1 個
const SCHEME_PREFIX: &str = "ApiKey ";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyError {
    /// Authorization ヘッダが無い、または値が空文字列
    #[error("no authorization header included")]
    NoAuthHeader,
    /// ヘッダは在るが `ApiKey <token>` 形式に合致しない
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Authorization ヘッダから API キーを取り出す。
///
/// - ヘッダ名の照合は case-insensitive (HeaderMap のルックアップに準拠)
/// - 同名ヘッダが複数ある場合は先頭の値だけを見る
/// - 値が `ApiKey ` で始まらなければ MalformedHeader
///   (scheme の大文字小文字違い、別 scheme、区切り空白なし、先頭の空白を含む)
/// - 返すのは prefix 直後の最初の空白区切りトークン
///   (`ApiKey my secret` → `my`。残り全部ではない)
/// - 値が `ApiKey ` ちょうどなら空文字列で成功
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = match headers.get(header::AUTHORIZATION) {
        None => return Err(ApiKeyError::NoAuthHeader),
        // visible ASCII でない値は「在るが形式不正」扱い
        Some(v) => v.to_str().map_err(|_| ApiKeyError::MalformedHeader)?,
    };

    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }

    let rest = value
        .strip_prefix(SCHEME_PREFIX)
        .ok_or(ApiKeyError::MalformedHeader)?;

    let key = rest.split(' ').next().unwrap_or("");
    Ok(key.to_string())
}
