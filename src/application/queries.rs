//! クエリ操作
//!
//! ログアクセスエンジンの中核。各操作は独立に呼び出せる純粋関数で、
//! ファイルパスとパラメータを明示的に受け取り、リクエスト間で共有する
//! 可変状態を持たない。すべて読み取り専用なので同一ファイルへの並行
//! 実行は安全である。

pub mod distinct_seconds;
pub mod error_positions;
pub mod file_stats;
pub mod filter_by_second;
pub mod paged_list;
pub mod search_all;

pub use distinct_seconds::distinct_seconds;
pub use error_positions::error_positions;
pub use file_stats::file_stats;
pub use filter_by_second::filter_by_second;
pub use paged_list::{Page, paged_list};
pub use search_all::{SEARCH_RESULT_CAP, search_all};
