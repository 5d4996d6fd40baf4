/// イベントディスパッチャー
///
/// イベント名をキーにしたリスナーのレジストリ。Lambdaの実行基盤から独立しており、
/// 起動時に一度だけ構築して以降は参照のみ行う。
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domain::{AppEvent, EventName};

/// リスナー処理のエラー型
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListenerError {
    /// ペイロードが期待するスキーマと一致しない
    #[error("invalid event payload: {0}")]
    InvalidPayload(String),

    /// 購読していない名前のイベントを受け取った
    #[error("unexpected event: {0}")]
    UnexpectedEvent(String),

    /// 副作用の実行に失敗
    #[error("side effect failed: {0}")]
    SideEffect(String),
}

/// イベントリスナー
#[async_trait]
pub trait EventListener: Send + Sync {
    /// ログ出力用のリスナー名
    fn name(&self) -> &str;

    /// イベントを処理する
    async fn on_event(&self, event: &AppEvent) -> Result<(), ListenerError>;
}

/// 1回のpublishの結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// 正常に処理したリスナー数
    pub delivered: usize,
    /// エラーまたはパニックで失敗したリスナー数
    pub failed: usize,
    /// 購読者がいなかった場合は1
    pub skipped: usize,
}

/// イベント名 → リスナー一覧 のレジストリ
#[derive(Default)]
pub struct EventDispatcher {
    listeners: HashMap<EventName, Vec<Arc<dyn EventListener>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定したイベント名にリスナーを登録する
    pub fn subscribe(&mut self, name: EventName, listener: Arc<dyn EventListener>) {
        self.listeners.entry(name).or_default().push(listener);
    }

    /// イベント名に登録済みのリスナー数
    pub fn listener_count(&self, name: &EventName) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }

    /// イベントを発行する
    ///
    /// 一致する名前のリスナーを登録順に一度ずつ呼び出す。
    /// リスナーのエラーやパニックはログに記録して集計し、呼び出し元へは伝播しない。
    pub async fn publish(&self, event: &AppEvent) -> DispatchReport {
        let mut report = DispatchReport::default();

        let Some(listeners) = self.listeners.get(&event.name) else {
            debug!(event_name = %event.name, "購読者がいないためスキップ");
            report.skipped = 1;
            return report;
        };

        for listener in listeners {
            let label = listener.name().to_string();
            let listener = Arc::clone(listener);
            let owned = event.clone();

            // パニックをJoinErrorとして受け取るため別タスクで実行する
            let outcome = tokio::spawn(async move { listener.on_event(&owned).await }).await;

            match outcome {
                Ok(Ok(())) => {
                    report.delivered += 1;
                }
                Ok(Err(err)) => {
                    warn!(
                        event_name = %event.name,
                        listener = %label,
                        error = %err,
                        "リスナー処理エラー"
                    );
                    report.failed += 1;
                }
                Err(join_err) => {
                    error!(
                        event_name = %event.name,
                        listener = %label,
                        error = %join_err,
                        "リスナー実行中にパニック"
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }
}
