/// Todo.Created イベントリスナー Lambda関数
///
/// EventBridge（または直接呼び出し）で届いたイベントをディスパッチャーに渡し、
/// Todo.Created のみをTodoCreatedListenerで処理する。
/// パースエラーやリスナーの失敗はログに残し、Lambdaとしては成功を返す（再試行しない）。
use std::sync::Arc;

use app::application::{DispatchReport, EventDispatcher, EventParser, TodoCreatedListener};
use app::infrastructure::{init_logging, TracingActivityRecorder};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// ディスパッチャーの静的インスタンス
///
/// コールドスタート時に一度だけ構築し、warm start時は再利用する。
static DISPATCHER: OnceCell<EventDispatcher> = OnceCell::const_new();

async fn dispatcher() -> &'static EventDispatcher {
    DISPATCHER.get_or_init(|| async { build_dispatcher() }).await
}

/// 購読関係を登録したディスパッチャーを構築
fn build_dispatcher() -> EventDispatcher {
    let listener = TodoCreatedListener::new(TracingActivityRecorder::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe(listener.event_name().clone(), Arc::new(listener));
    dispatcher
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 処理結果に関わらず成功を返す（再試行しない）。
async fn handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    process(&event.payload, &event.context.request_id).await;
    Ok(())
}

/// イベントを処理してディスパッチ結果を返す
///
/// # 処理フロー
/// 1. ペイロードをAppEventにパース（失敗時はログ出力して`None`）
/// 2. ディスパッチャーでイベントを発行
/// 3. 処理結果をログに記録
async fn process(payload: &Value, request_id: &str) -> Option<DispatchReport> {
    let app_event = match EventParser::parse(payload) {
        Ok(app_event) => app_event,
        Err(err) => {
            warn!(
                request_id = request_id,
                error = %err,
                payload = %payload,
                "イベントのパースに失敗"
            );
            return None;
        }
    };

    info!(
        request_id = request_id,
        event_name = %app_event.name,
        event_id = ?app_event.id,
        event_time = ?app_event.time,
        "イベントを受信"
    );

    let report = dispatcher().await.publish(&app_event).await;

    info!(
        request_id = request_id,
        event_name = %app_event.name,
        delivered = report.delivered,
        failed = report.failed,
        skipped = report.skipped,
        "イベント処理完了"
    );

    Some(report)
}
