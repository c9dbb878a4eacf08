// アプリケーション層モジュール
pub mod transform_handler;

// 再エクスポート
pub use transform_handler::{TransformHandler, TransformHandlerError};
