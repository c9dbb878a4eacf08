/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::logging_config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// 設定は環境変数`RUST_LOG`と`LOG_FORMAT`から読み込む。
/// この関数は複数回呼び出しても安全で、最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use payload_transformer::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging() {
    init_logging_with(&LoggingConfig::from_env());
}

/// 指定した設定でログサブスクライバーを初期化する
///
/// `init_logging`と初期化状態を共有するため、どちらを先に呼んでも一度しか初期化されない。
pub fn init_logging_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let env_filter = build_env_filter(config.filter());

        // JSON形式のログレイヤー（Lambda/CloudWatch向け）
        let json_layer = (config.format() == LogFormat::Json).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .flatten_event(true)
                .with_current_span(false)
        });

        // ローカル実行向けの1行形式
        let compact_layer = (config.format() == LogFormat::Compact).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .compact()
        });

        // 他で初期化済みの場合は失敗するが、そのまま既存のサブスクライバーを使う
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .with(compact_layer)
            .try_init();
    });
}

/// フィルター文字列からEnvFilterを構築する
///
/// パースできない場合はデフォルト（info）を使用する。
fn build_env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
