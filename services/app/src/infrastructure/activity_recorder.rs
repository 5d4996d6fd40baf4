/// イベントの副作用（アクティビティ記録）
///
/// Todo.Created受信時の副作用を抽象化する。本番実装はtracingでログ出力のみ行い、
/// テストではモック実装で呼び出し回数を検証する。
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::domain::Todo;

/// 記録処理のエラー型
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error("failed to record activity: {0}")]
    Failed(String),
}

/// アクティビティ記録用トレイト
#[async_trait]
pub trait ActivityRecorder: Send + Sync {
    /// 作成されたTodoを記録する
    ///
    /// # 引数
    /// * `todo` - デコード済みのTodo
    /// * `payload` - 受信した生のペイロード
    async fn record(&self, todo: &Todo, payload: &Value) -> Result<(), RecordError>;
}

/// 構造化ログとして記録する実装
#[derive(Debug, Clone, Default)]
pub struct TracingActivityRecorder;

impl TracingActivityRecorder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ActivityRecorder for TracingActivityRecorder {
    async fn record(&self, todo: &Todo, payload: &Value) -> Result<(), RecordError> {
        info!(
            todo_id = todo.id,
            title = %todo.title,
            completed = todo.completed,
            payload = %payload,
            "Todo作成イベントを受信"
        );
        Ok(())
    }
}
