/// 変換対象イベント
///
/// 呼び出し元から渡されたイベントJSONから、変換に使う2つのペイロードを取り出す。
/// ペイロードの中身は検証せず、そのまま受け渡す。
use serde_json::Value;
use thiserror::Error;

/// 元のcurlリクエストのペイロードを保持するキー
pub const ORIGINAL_CURL_PAYLOAD_KEY: &str = "originalCurlPayload";

/// リクエストテンプレートで変換済みのペイロードを保持するキー
pub const REQUEST_TRANSFORM_PAYLOAD_KEY: &str = "requestTransformPayload";

/// イベント読み取りのエラー型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    /// イベントがJSONオブジェクトでない
    #[error("expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

/// 受信イベントから抽出したペイロード
///
/// キーが存在しない場合は`None`、明示的に`null`が渡された場合は
/// `Some(Value::Null)`として区別する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformEvent {
    /// 元のcurlペイロード
    pub original_curl_payload: Option<Value>,
    /// リクエスト変換ペイロード
    pub request_transform_payload: Option<Value>,
}

impl TransformEvent {
    /// イベントJSONから2つのペイロードを抽出
    ///
    /// 上記2キー以外のフィールドは無視する。
    ///
    /// # 戻り値
    /// * `Ok(TransformEvent)` - イベントがJSONオブジェクトの場合
    /// * `Err(EventError::NotAnObject)` - null・数値・文字列・配列などの場合
    pub fn from_value(event: &Value) -> Result<Self, EventError> {
        let object = event.as_object().ok_or(EventError::NotAnObject {
            kind: json_kind(event),
        })?;

        Ok(Self {
            original_curl_payload: object.get(ORIGINAL_CURL_PAYLOAD_KEY).cloned(),
            request_transform_payload: object.get(REQUEST_TRANSFORM_PAYLOAD_KEY).cloned(),
        })
    }
}

/// エラーメッセージ用のJSON型名
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
