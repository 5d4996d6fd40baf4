//! サーバーレスHTTP APIとTodoイベントリスナー
//!
//! - `bin/http_api`: API Gateway経由で GET /, GET /hello, POST /data を処理
//! - `bin/todo_created`: Todo.Created イベントを受信してログに記録

// ドメイン層
pub mod domain;

// アプリケーション層
pub mod application;

// インフラストラクチャ層
pub mod infrastructure;
