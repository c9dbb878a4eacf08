/// 変換結果とレスポンスエンベロープ
///
/// 元のペイロード、リクエスト変換ペイロード、Lambda側で付与する固定メッセージを
/// 1つのオブジェクトにまとめる。
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TransformEvent;

/// Lambda変換で付与する固定メッセージ
pub const LAMBDA_TRANSFORM_MESSAGE: &str = "All pigs are created equal";

/// Lambdaが付与する変換ペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaTransformPayload {
    pub message: String,
}

impl Default for LambdaTransformPayload {
    fn default() -> Self {
        Self {
            message: LAMBDA_TRANSFORM_MESSAGE.to_string(),
        }
    }
}

/// 変換結果
///
/// 入力で欠落していたペイロードはシリアライズ時にキーごと省略する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_curl_payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_transform_payload: Option<Value>,
    pub lambda_transform_payload: LambdaTransformPayload,
}

impl From<TransformEvent> for TransformResult {
    fn from(event: TransformEvent) -> Self {
        Self {
            original_curl_payload: event.original_curl_payload,
            request_transform_payload: event.request_transform_payload,
            lambda_transform_payload: LambdaTransformPayload::default(),
        }
    }
}

/// レスポンスエンベロープ
///
/// `body`は文字列化せず、JSONオブジェクトのまま返す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub body: TransformResult,
}

impl ResponseEnvelope {
    pub fn new(body: TransformResult) -> Self {
        Self { body }
    }
}
