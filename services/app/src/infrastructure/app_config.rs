// アプリケーション設定
//
// 環境変数からHTTP APIの設定値を読み込み、型安全に提供する。
// 未設定・不正な値はデフォルト値にフォールバックする。

use lambda_http::http::HeaderValue;
use tracing::{info, warn};

/// /hello の挨拶に使う名前のデフォルト
pub const DEFAULT_GREETING_NAME: &str = "World";

/// POST /data で受け付けるボディの最大バイト数（1MiB）
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;

/// CORS Access-Control-Allow-Origin のデフォルト
pub const DEFAULT_CORS_ALLOW_ORIGIN: &str = "*";

/// 環境変数名: 挨拶に使う名前
pub const ENV_GREETING_NAME: &str = "APP_GREETING_NAME";

/// 環境変数名: ボディ最大バイト数
pub const ENV_MAX_BODY_BYTES: &str = "APP_MAX_BODY_BYTES";

/// 環境変数名: CORS Allow-Origin
pub const ENV_CORS_ALLOW_ORIGIN: &str = "APP_CORS_ALLOW_ORIGIN";

/// HTTP API設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// /hello の挨拶に使う名前
    pub greeting_name: String,
    /// POST /data ボディの最大バイト数
    pub max_body_bytes: usize,
    /// Access-Control-Allow-Origin ヘッダー値（ヘッダー値として検証済み）
    pub cors_allow_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting_name: DEFAULT_GREETING_NAME.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors_allow_origin: DEFAULT_CORS_ALLOW_ORIGIN.to_string(),
        }
    }
}

impl AppConfig {
    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - APP_GREETING_NAME: 挨拶に使う名前（空文字はデフォルト扱い）
    /// - APP_MAX_BODY_BYTES: ボディ最大バイト数（0や数値以外はデフォルト扱い）
    /// - APP_CORS_ALLOW_ORIGIN: CORS Allow-Origin（ヘッダー値として不正ならデフォルト扱い）
    pub fn from_env() -> Self {
        let greeting_name = std::env::var(ENV_GREETING_NAME)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_GREETING_NAME.to_string());

        let max_body_bytes = parse_env_usize(ENV_MAX_BODY_BYTES, DEFAULT_MAX_BODY_BYTES);

        let cors_allow_origin = match std::env::var(ENV_CORS_ALLOW_ORIGIN) {
            Ok(value) if is_valid_header_value(value.trim()) => value.trim().to_string(),
            Ok(value) => {
                warn!(
                    key = ENV_CORS_ALLOW_ORIGIN,
                    value = %value,
                    default = DEFAULT_CORS_ALLOW_ORIGIN,
                    "ヘッダー値として不正なため、デフォルト値を使用"
                );
                DEFAULT_CORS_ALLOW_ORIGIN.to_string()
            }
            Err(_) => DEFAULT_CORS_ALLOW_ORIGIN.to_string(),
        };

        info!(
            greeting_name = %greeting_name,
            max_body_bytes,
            cors_allow_origin = %cors_allow_origin,
            "AppConfig loaded"
        );

        Self {
            greeting_name,
            max_body_bytes,
            cors_allow_origin,
        }
    }
}

/// 空でなく、HTTPヘッダー値として使える文字列か
fn is_valid_header_value(value: &str) -> bool {
    !value.is_empty() && HeaderValue::from_str(value).is_ok()
}

/// 環境変数から正のusize値を読み込む
///
/// 未設定、パースエラー、0の場合はデフォルト値を返す。
fn parse_env_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(value) => match value.trim().parse::<usize>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                warn!(
                    key,
                    value = %value,
                    default,
                    "Environment variable parse error, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
