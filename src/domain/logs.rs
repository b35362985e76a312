//! ログアクセス集約
//!
//! 1行のテキストからタイムスタンプ・秒キー・重大度を導出するモジュール

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
