//! Web インターフェース
//!
//! ログ閲覧用のHTTP APIと静的ファイル配信を提供します。
//! ページング・検索・秒単位グルーピング・統計・エラー位置インデックスの
//! エンドポイントを含みます。

mod error_response;
mod handlers;
mod models;

pub mod server;

pub use handlers::AppState;

// 内部使用のため、ハンドラ関数のみを再エクスポート
pub(crate) use handlers::{get_errors, get_logs, get_seconds, get_stats, search_logs};
