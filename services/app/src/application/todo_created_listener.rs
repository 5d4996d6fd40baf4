/// Todo.Created リスナー
///
/// ペイロードをTodoとしてデコードし、ActivityRecorderに一度だけ記録を依頼する。
/// 状態の更新やレスポンスの返却は行わない。
use async_trait::async_trait;
use tracing::warn;

use crate::application::{EventListener, ListenerError};
use crate::domain::{AppEvent, EventName, Todo};
use crate::infrastructure::ActivityRecorder;

pub struct TodoCreatedListener<R>
where
    R: ActivityRecorder,
{
    recorder: R,
    subscribed: EventName,
}

impl<R> TodoCreatedListener<R>
where
    R: ActivityRecorder,
{
    pub fn new(recorder: R) -> Self {
        Self {
            recorder,
            subscribed: EventName::todo_created(),
        }
    }

    /// 購読するイベント名（Todo.Created）
    pub fn event_name(&self) -> &EventName {
        &self.subscribed
    }
}

#[async_trait]
impl<R> EventListener for TodoCreatedListener<R>
where
    R: ActivityRecorder,
{
    fn name(&self) -> &str {
        "todo_created"
    }

    async fn on_event(&self, event: &AppEvent) -> Result<(), ListenerError> {
        // 購読名以外のイベントは受け付けない
        if event.name != self.subscribed {
            warn!(
                event_name = %event.name,
                subscribed = %self.subscribed,
                "購読対象外のイベントを受信"
            );
            return Err(ListenerError::UnexpectedEvent(event.name.to_string()));
        }

        let todo = Todo::from_value(&event.payload)
            .map_err(|err| ListenerError::InvalidPayload(err.to_string()))?;

        self.recorder
            .record(&todo, &event.payload)
            .await
            .map_err(|err| ListenerError::SideEffect(err.to_string()))
    }
}
