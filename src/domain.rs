//! ドメイン層
//!
//! ログ行の解析とパネルのモデルを含む層

pub mod logs;
pub mod panel;
