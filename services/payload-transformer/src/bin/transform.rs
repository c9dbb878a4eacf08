/// ペイロード変換Lambdaエントリポイント
///
/// 呼び出し元から受け取ったイベントに含まれる元のcurlペイロードと
/// リクエスト変換ペイロードに、Lambda変換ペイロードを加えて返却する。
///
/// `body`はAPI Gatewayプロキシ統合のような文字列ではなく、
/// JSONオブジェクトのまま返す。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use payload_transformer::application::TransformHandler;
use payload_transformer::domain::ResponseEnvelope;
use payload_transformer::infrastructure::{init_logging_with, LoggingConfig};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    let logging_config = LoggingConfig::from_env();
    init_logging_with(&logging_config);

    info!(
        log_filter = logging_config.filter(),
        log_format = logging_config.format().as_str(),
        "ペイロード変換Lambda関数を初期化"
    );

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 不正なイベントはここで回復せず、呼び出し失敗としてランタイムに返す。
/// ログ出力はTransformHandlerの1件のみ。
async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    Ok(TransformHandler::new().handle(&event.payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use payload_transformer::infrastructure::init_logging;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context as LayerContext, Layer, SubscriberExt};

    /// 発行されたログイベント数を数えるレイヤー
    #[derive(Clone, Default)]
    struct CountingLayer {
        count: Arc<AtomicUsize>,
    }

    impl<S: Subscriber> Layer<S> for CountingLayer {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: LayerContext<'_, S>) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// ハンドラーを1回呼び出し、結果とログ件数を返す
    async fn invoke_counting_logs(payload: Value) -> (Result<ResponseEnvelope, Error>, usize) {
        let layer = CountingLayer::default();
        let count = layer.count.clone();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer));

        let result = handler(create_lambda_event(payload)).await;

        (result, count.load(Ordering::SeqCst))
    }

    /// テスト用のLambdaイベントを作成
    fn create_lambda_event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    async fn test_handler_returns_transformed_envelope() {
        init_logging();

        let event = create_lambda_event(json!({
            "originalCurlPayload": {"url": "http://x"},
            "requestTransformPayload": {"headers": {}}
        }));

        let response = handler(event).await.unwrap();

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "body": {
                    "originalCurlPayload": {"url": "http://x"},
                    "requestTransformPayload": {"headers": {}},
                    "lambdaTransformPayload": {"message": "All pigs are created equal"}
                }
            })
        );
    }

    #[tokio::test]
    async fn test_handler_empty_event_returns_message_only() {
        init_logging();

        let response = handler(create_lambda_event(json!({}))).await.unwrap();

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"body":{"lambdaTransformPayload":{"message":"All pigs are created equal"}}}"#
        );
    }

    /// bodyは文字列化されずオブジェクトのまま
    #[tokio::test]
    async fn test_handler_body_is_not_stringified() {
        init_logging();

        let response = handler(create_lambda_event(json!({
            "originalCurlPayload": "raw"
        })))
        .await
        .unwrap();

        let serialized = serde_json::to_value(response).unwrap();
        assert!(serialized["body"].is_object());
        assert_eq!(serialized["body"]["originalCurlPayload"], "raw");
    }

    /// nullイベントは呼び出しエラーになる
    #[tokio::test]
    async fn test_handler_null_event_returns_error() {
        init_logging();

        let result = handler(create_lambda_event(Value::Null)).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed event: expected a JSON object, got null"
        );
    }

    #[tokio::test]
    async fn test_handler_array_event_returns_error() {
        init_logging();

        let result = handler(create_lambda_event(json!([1, 2, 3]))).await;

        assert!(result.is_err());
    }

    /// 正常なイベントのログは1件
    #[tokio::test]
    async fn test_handler_valid_event_logs_once() {
        let (result, log_count) = invoke_counting_logs(json!({})).await;

        assert!(result.is_ok());
        assert_eq!(log_count, 1);
    }

    /// 不正なイベントでもログは1件（エラーはランタイムに任せる）
    #[tokio::test]
    async fn test_handler_null_event_logs_once() {
        let (result, log_count) = invoke_counting_logs(Value::Null).await;

        assert!(result.is_err());
        assert_eq!(log_count, 1);
    }
}
