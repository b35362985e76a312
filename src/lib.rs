//! # CT Log Viewer
//!
//! プレーンテキストのログファイルをHTTP経由で提供し、ブラウザ側のビューアから
//! ページング・検索・秒単位のグルーピング・エラー位置インデックスを行うための
//! サーバです。
//!
//! このクレートは Domain-Driven Design (DDD) 原則に基づいて設計されており、
//! 以下の層に分かれています：
//!
//! - **Domain Layer**: ログ行の解析とレベル分類のモデル
//! - **Application Layer**: ログファイルに対する読み取り専用クエリ
//! - **Infrastructure Layer**: ファイルシステムへのアクセス
//! - **Interface Layer**: Web API と静的ファイル配信

pub mod application;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use domain::*;
