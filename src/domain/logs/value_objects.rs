//! ログレベル値オブジェクト

use serde::{Deserialize, Serialize};
use std::fmt;

/// ログ行の重大度分類
///
/// 行テキストに対する大文字小文字を区別しない部分文字列マッチで導出される。
/// 判定は優先順位付きで、最初にマッチした規則が勝つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Normal,
}

impl LogLevel {
    /// 行テキストからレベルを判定
    ///
    /// `error`/`exception` → Error、`warn` → Warning、`info`/`debug` → Info、
    /// それ以外は Normal。"error" と "warn" の両方を含む行は Error になる。
    pub fn detect(line: &str) -> Self {
        let lower = line.to_lowercase();
        if lower.contains("error") || lower.contains("exception") {
            LogLevel::Error
        } else if lower.contains("warn") {
            LogLevel::Warning
        } else if lower.contains("info") || lower.contains("debug") {
            LogLevel::Info
        } else {
            LogLevel::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Normal => "normal",
        }
    }

    /// エラーインジケータの対象かどうか（error または warning）
    pub fn is_notable(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Warning)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
