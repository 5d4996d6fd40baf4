/// Todo.Created イベントのペイロード
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 作成されたTodo
///
/// ペイロード形式: `{"id": <u64>, "title": "<string>", "completed": <bool>}`
/// `completed`は省略時`false`。未知のフィールドは無視する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// JSON値からTodoを復元する
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Todo::deserialize(value)
    }
}
