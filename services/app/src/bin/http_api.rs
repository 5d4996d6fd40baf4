/// HTTP API Lambdaエントリポイント
///
/// API Gateway経由のHTTPリクエストを静的ルートテーブルで解決し、
/// JSONレスポンスを返却する。
use app::application::RequestHandler;
use app::infrastructure::{init_logging, AppConfig};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("HTTP API Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// ルート不一致・不正なボディ・内部エラーはすべてHTTPレスポンスに変換するため、
/// Lambdaとしてはエラーを返さない。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let request_handler = RequestHandler::new(AppConfig::from_env());
    Ok(request_handler.handle(&request))
}
