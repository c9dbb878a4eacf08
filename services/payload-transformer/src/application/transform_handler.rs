/// 変換ハンドラー
///
/// 受信イベントをログに記録し、元のペイロードとリクエスト変換ペイロードに
/// Lambda変換ペイロードを加えたレスポンスを組み立てる
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::domain::{EventError, ResponseEnvelope, TransformEvent, TransformResult};

/// 変換ハンドラーのエラー型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformHandlerError {
    /// イベントがオブジェクトとして読めない
    #[error("malformed event: {0}")]
    MalformedEvent(#[from] EventError),
}

/// イベント変換を行うハンドラー
///
/// 状態を持たないため、呼び出し間で共有しても結果は変わらない
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformHandler;

impl TransformHandler {
    /// 新しいTransformHandlerを作成
    pub fn new() -> Self {
        Self
    }

    /// イベントを変換してレスポンスエンベロープを返す
    ///
    /// # 処理フロー
    /// 1. 受信イベント全体をJSONとしてログ出力
    /// 2. originalCurlPayload、requestTransformPayloadを抽出
    /// 3. 固定メッセージを加えた変換結果を構築
    /// 4. `body`に変換結果を入れたエンベロープを返却
    ///
    /// # 引数
    /// * `event` - 呼び出し元から渡されたイベントJSON
    ///
    /// # 戻り値
    /// * 成功時は`Ok(ResponseEnvelope)`
    /// * イベントがJSONオブジェクトでない場合は`Err(TransformHandlerError::MalformedEvent)`
    pub fn handle(&self, event: &Value) -> Result<ResponseEnvelope, TransformHandlerError> {
        // 受信イベントを記録（1呼び出しにつき1回）
        info!(event = %event, "Received event");

        let transform_event = TransformEvent::from_value(event)?;

        Ok(ResponseEnvelope::new(TransformResult::from(transform_event)))
    }
}
