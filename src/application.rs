//! アプリケーション層
//!
//! ログファイルに対する読み取り専用クエリ

pub mod queries;
