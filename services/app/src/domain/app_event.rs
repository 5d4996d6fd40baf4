/// アプリケーションイベント
///
/// 外部から発行され、リスナーに一度だけ届けられる通知。
/// 永続化・ACK・再試行の契約は持たない。
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::EventName;

/// 名前とペイロードを持つイベント
#[derive(Debug, Clone, PartialEq)]
pub struct AppEvent {
    /// ディスパッチに使うイベント名
    pub name: EventName,
    /// ペイロード（スキーマはリスナー側で解釈）
    pub payload: Value,
    /// 発行元が付与したイベントID（EventBridgeの場合のみ）
    pub id: Option<String>,
    /// 発行時刻（EventBridgeの場合のみ）
    pub time: Option<DateTime<Utc>>,
}

impl AppEvent {
    /// メタデータなしでイベントを作成
    pub fn new(name: EventName, payload: Value) -> Self {
        Self {
            name,
            payload,
            id: None,
            time: None,
        }
    }
}
