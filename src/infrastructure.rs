//! インフラストラクチャ層
//!
//! ファイルシステムとの統合

pub mod storage;
