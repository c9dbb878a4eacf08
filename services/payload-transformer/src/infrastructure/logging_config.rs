// ログ設定
//
// ログレベルと出力形式を環境変数から読み込む。
// サブスクライバー初期化前に読むため、この中ではログを出さない。

// ===========================================
// デフォルト値定義
// ===========================================

/// RUST_LOG未設定時のフィルター
pub const DEFAULT_LOG_FILTER: &str = "info";

// ===========================================
// 環境変数名定義
// ===========================================

/// 環境変数名: ログフィルター（EnvFilter形式）
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

/// 環境変数名: 出力形式（json / compact）
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// ログ出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// CloudWatch向けのJSON形式
    #[default]
    Json,
    /// 人間が読みやすい1行形式
    Compact,
}

impl LogFormat {
    /// 文字列から出力形式を判定
    ///
    /// 大文字小文字と前後の空白は無視する。未知の値はJSON形式にフォールバック。
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "pretty" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// EnvFilterディレクティブ
    filter: String,
    /// 出力形式
    format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// 明示的な値で新しいLoggingConfigを作成（テスト用）
    pub fn new(filter: impl Into<String>, format: LogFormat) -> Self {
        Self {
            filter: filter.into(),
            format,
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - RUST_LOG: ログフィルター（未設定・空文字の場合はinfo）
    /// - LOG_FORMAT: json / compact（pretty・textはcompactの別名。未設定・未知の値の場合はjson）
    pub fn from_env() -> Self {
        let filter = std::env::var(ENV_LOG_FILTER)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let format = std::env::var(ENV_LOG_FORMAT)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        Self { filter, format }
    }

    /// ログフィルターを取得
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// 出力形式を取得
    pub fn format(&self) -> LogFormat {
        self.format
    }
}
