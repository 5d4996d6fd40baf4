// HTTPリクエストハンドラー
//
// 静的ルートテーブルでリクエストを解決し、各ルートのJSONレスポンスを生成する。
// 全レスポンスにContent-TypeとCORSヘッダーを付与する。

use lambda_http::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::application::ApiError;
use crate::domain::{resolve_route, DataPayload, RouteKind};
use crate::infrastructure::app_config::{AppConfig, DEFAULT_CORS_ALLOW_ORIGIN};

/// シリアライズに失敗した場合に返す固定ボディ
const INTERNAL_ERROR_BODY: &str =
    r#"{"error":"internal_error","message":"Internal server error"}"#;

/// HTTPリクエストハンドラー
pub struct RequestHandler {
    config: AppConfig,
    allow_origin: HeaderValue,
}

impl RequestHandler {
    pub fn new(config: AppConfig) -> Self {
        let allow_origin = HeaderValue::from_str(&config.cors_allow_origin)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CORS_ALLOW_ORIGIN));

        Self {
            config,
            allow_origin,
        }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// 未定義のルートは404、不正なボディは400を返す。
    /// 処理中のエラーはすべてレスポンスに変換され、この関数は失敗しない。
    pub fn handle(&self, request: &Request) -> Response<Body> {
        let method = request.method();
        let path = request.uri().path();
        let route = resolve_route(method, path);

        let result = match route {
            Some(RouteKind::Root) => Ok(self.root()),
            Some(RouteKind::Hello) => Ok(self.hello()),
            Some(RouteKind::Data) => self.data(request.body()),
            None => Err(ApiError::not_found(format!(
                "route not found: {} {}",
                method, path
            ))),
        };

        let response = match result {
            Ok(body) => self.respond(StatusCode::OK, &body),
            Err(err) => {
                warn!(
                    method = %method,
                    path = path,
                    status = err.status().as_u16(),
                    error = err.error(),
                    message = err.message(),
                    "リクエスト処理エラー"
                );
                self.respond(err.status(), err.body())
            }
        };

        info!(
            method = %method,
            path = path,
            route = ?route,
            status = response.status().as_u16(),
            "レスポンス送信"
        );

        response
    }

    /// GET /
    fn root(&self) -> Value {
        json!({ "Hello": "World" })
    }

    /// GET /hello
    fn hello(&self) -> Value {
        json!({ "message": format!("Hello, {}!", self.config.greeting_name) })
    }

    /// POST /data
    fn data(&self, body: &Body) -> Result<Value, ApiError> {
        let bytes = body_bytes(body);

        if bytes.len() > self.config.max_body_bytes {
            return Err(ApiError::payload_too_large(format!(
                "request body exceeds {} bytes",
                self.config.max_body_bytes
            )));
        }

        let payload = DataPayload::parse(bytes)?;
        let length = payload.message_length();

        Ok(json!({
            "received": payload,
            "length": length,
        }))
    }

    /// JSONボディを持つレスポンスを構築
    fn respond<T: Serialize>(&self, status: StatusCode, body: &T) -> Response<Body> {
        match serde_json::to_string(body) {
            Ok(json) => self.build_response(status, json),
            Err(err) => {
                error!(error = %err, "レスポンスのシリアライズに失敗");
                self.build_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_BODY.to_string(),
                )
            }
        }
    }

    fn build_response(&self, status: StatusCode, json: String) -> Response<Body> {
        let mut response = Response::new(Body::Text(json));
        *response.status_mut() = status;
        *response.headers_mut() = self.build_headers();
        response
    }

    /// 共通ヘッダーを生成
    ///
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: 設定値（デフォルト *）
    /// - Access-Control-Allow-Headers: Content-Type
    /// - Access-Control-Allow-Methods: GET, POST, OPTIONS
    pub fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        );

        headers
    }
}

/// ボディをバイト列として取得
fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
        _ => &[],
    }
}
