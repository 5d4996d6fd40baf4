/// ログ基盤モジュール
///
/// Lambda環境（CloudWatch Logs）向けにJSON形式の構造化ログを設定する。
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// デフォルトのログレベル（RUST_LOG未設定時）
const DEFAULT_LOG_LEVEL: &str = "info";

static INIT: Once = Once::new();

/// ログサブスクライバーを初期化する
///
/// `RUST_LOG`でフィルタリングし、未設定または不正な場合は`info`を使う。
/// 複数回呼び出しても初期化は最初の一回のみ。
/// 他のサブスクライバーが既に登録済みの場合は何もしない。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false);

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_logging_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    /// テスト用サブスクライバー登録後でもinit_loggingはパニックしない
    #[test]
    fn test_init_logging_after_test_logging_does_not_panic() {
        init_test_logging();
        init_logging();
        init_logging();
    }

    #[test]
    fn test_json_layer_can_be_composed() {
        let env_filter = EnvFilter::new(DEFAULT_LOG_LEVEL);
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .flatten_event(true);

        let _subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer);
    }

    #[test]
    fn test_log_with_request_context() {
        init_test_logging();

        let span = tracing::info_span!("request", method = "GET", path = "/hello");
        let _guard = span.enter();

        tracing::info!(status = 200, "レスポンス送信");
        tracing::debug!(route = "Hello", "ルート解決");
    }
}
