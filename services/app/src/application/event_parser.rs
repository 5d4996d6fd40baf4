/// イベントエンベロープパーサー
///
/// Lambdaに届いたJSONをAppEventに変換する。以下の2形式に対応:
/// - EventBridge: `{"source": "Todo", "detail-type": "Created", "detail": {...}}`
/// - 直接呼び出し: `{"name": "Todo.Created", "payload": {...}}`
use aws_lambda_events::event::eventbridge::EventBridgeEvent;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{AppEvent, EventName, EventNameError};

/// エンベロープのパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// JSONオブジェクトでない
    #[error("event must be a JSON object")]
    NotObject,

    /// どの形式にも当てはまらない
    #[error("unrecognized event envelope")]
    UnknownEnvelope,

    /// 形式は判別できたがフィールドが不正
    #[error("invalid event envelope: {0}")]
    InvalidEnvelope(String),

    /// イベント名が不正
    #[error("invalid event name: {0}")]
    InvalidName(#[from] EventNameError),
}

/// 直接呼び出しのイベント形式
#[derive(Debug, Deserialize)]
struct DirectEnvelope {
    name: String,
    #[serde(default)]
    payload: Value,
}

pub struct EventParser;

impl EventParser {
    /// JSON値をAppEventに変換
    ///
    /// `detail-type`を持つオブジェクトはEventBridge形式、
    /// `name`を持つオブジェクトは直接呼び出し形式として解釈する。
    pub fn parse(value: &Value) -> Result<AppEvent, ParseError> {
        let object = value.as_object().ok_or(ParseError::NotObject)?;

        if object.contains_key("detail-type") {
            Self::parse_event_bridge(value)
        } else if object.contains_key("name") {
            Self::parse_direct(value)
        } else {
            Err(ParseError::UnknownEnvelope)
        }
    }

    /// EventBridge形式をパース
    ///
    /// `detail`が省略されている場合はnullとして扱う。
    fn parse_event_bridge(value: &Value) -> Result<AppEvent, ParseError> {
        let mut object = value.as_object().cloned().ok_or(ParseError::NotObject)?;
        object.entry("detail").or_insert(Value::Null);

        let envelope: EventBridgeEvent<Value> = serde_json::from_value(Value::Object(object))
            .map_err(|err| ParseError::InvalidEnvelope(err.to_string()))?;

        let name = EventName::from_parts(&envelope.source, &envelope.detail_type)?;

        Ok(AppEvent {
            name,
            payload: envelope.detail,
            id: envelope.id,
            time: envelope.time,
        })
    }

    fn parse_direct(value: &Value) -> Result<AppEvent, ParseError> {
        let envelope = DirectEnvelope::deserialize(value)
            .map_err(|err| ParseError::InvalidEnvelope(err.to_string()))?;

        let name = EventName::parse(&envelope.name)?;

        Ok(AppEvent::new(name, envelope.payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_parse_event_bridge_envelope() {
        let value = json!({
            "version": "0",
            "id": "6a7e8feb-b491-4cf7-a9f1-bf3703467718",
            "detail-type": "Created",
            "source": "Todo",
            "account": "111122223333",
            "time": "2017-12-22T18:43:48Z",
            "region": "us-west-1",
            "resources": [],
            "detail": {"id": 1, "title": "x"}
        });

        let event = EventParser::parse(&value).unwrap();

        assert_eq!(event.name, EventName::todo_created());
        assert_eq!(event.payload, json!({"id": 1, "title": "x"}));
        assert_eq!(event.id.as_deref(), Some("6a7e8feb-b491-4cf7-a9f1-bf3703467718"));
        assert_eq!(
            event.time,
            Some(Utc.with_ymd_and_hms(2017, 12, 22, 18, 43, 48).unwrap())
        );
    }

    #[test]
    fn test_parse_event_bridge_without_detail() {
        let value = json!({"source": "Todo", "detail-type": "Created"});

        let event = EventParser::parse(&value).unwrap();

        assert_eq!(event.payload, Value::Null);
        assert!(event.id.is_none());
        assert!(event.time.is_none());
    }

    #[test]
    fn test_parse_direct_envelope() {
        let value = json!({"name": "Todo.Created", "payload": {"id": 2, "title": "y"}});

        let event = EventParser::parse(&value).unwrap();

        assert_eq!(event.name, EventName::todo_created());
        assert_eq!(event.payload["id"], 2);
    }

    #[test]
    fn test_parse_other_event_name() {
        let value = json!({"name": "Todo.Deleted", "payload": {}});

        let event = EventParser::parse(&value).unwrap();

        assert_eq!(event.name.as_str(), "Todo.Deleted");
    }

    #[test]
    fn test_parse_not_object() {
        assert_eq!(EventParser::parse(&json!([1, 2])), Err(ParseError::NotObject));
        assert_eq!(EventParser::parse(&json!("Todo.Created")), Err(ParseError::NotObject));
    }

    #[test]
    fn test_parse_unknown_envelope() {
        assert_eq!(
            EventParser::parse(&json!({"foo": "bar"})),
            Err(ParseError::UnknownEnvelope)
        );
    }

    #[test]
    fn test_parse_event_bridge_missing_source() {
        let result = EventParser::parse(&json!({"detail-type": "Created", "detail": {}}));
        assert!(matches!(result, Err(ParseError::InvalidEnvelope(_))));
    }

    #[test]
    fn test_parse_event_bridge_bad_time() {
        let result = EventParser::parse(&json!({
            "source": "Todo",
            "detail-type": "Created",
            "time": "yesterday"
        }));
        assert!(matches!(result, Err(ParseError::InvalidEnvelope(_))));
    }

    #[test]
    fn test_parse_direct_name_not_string() {
        let result = EventParser::parse(&json!({"name": 1}));
        assert!(matches!(result, Err(ParseError::InvalidEnvelope(_))));
    }

    #[test]
    fn test_parse_invalid_name() {
        assert!(matches!(
            EventParser::parse(&json!({"name": "Created"})),
            Err(ParseError::InvalidName(_))
        ));
        assert!(matches!(
            EventParser::parse(&json!({"source": "", "detail-type": "Created"})),
            Err(ParseError::InvalidName(_))
        ));
    }
}
