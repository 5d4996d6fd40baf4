/// POST /data のリクエストボディ
///
/// 形式: `{"message": "<空でない文字列>"}`
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ボディ検証エラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataPayloadError {
    /// ボディが空（空白のみを含む）
    #[error("request body is empty")]
    EmptyBody,

    /// JSONとして不正、またはスキーマ不一致
    #[error("invalid request body: {0}")]
    InvalidJson(String),

    /// messageが空文字または空白のみ
    #[error("message must not be empty")]
    EmptyMessage,
}

/// POST /data で受け付けるペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPayload {
    pub message: String,
}

impl DataPayload {
    /// 生のボディバイト列をパースして検証する
    pub fn parse(body: &[u8]) -> Result<Self, DataPayloadError> {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(DataPayloadError::EmptyBody);
        }

        let payload: DataPayload = serde_json::from_slice(body)
            .map_err(|err| DataPayloadError::InvalidJson(err.to_string()))?;

        if payload.message.trim().is_empty() {
            return Err(DataPayloadError::EmptyMessage);
        }

        Ok(payload)
    }

    /// messageの文字数（バイト数ではない）
    pub fn message_length(&self) -> usize {
        self.message.chars().count()
    }
}
