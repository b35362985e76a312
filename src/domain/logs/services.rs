//! 行解析サービス
//!
//! 1行のテキストからタイムスタンプ・秒キー・レベルを抽出する純粋関数群。
//! 行間で状態を持たず、同じ入力には常に同じ結果を返す。

use super::entities::LogRecord;
use super::value_objects::LogLevel;
use regex::Regex;
use std::sync::LazyLock;

// タイムスタンプ抽出パターン（優先順位順）
// 複数パターンにマッチしうる行があるため、この順序を変えてはならない。
static TIMESTAMP_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}").unwrap(),
        Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}").unwrap(),
        Regex::new(r"\d{2}:\d{2}:\d{2}\.\d{3}").unwrap(),
    ]
});

// 秒キー抽出パターン（優先順位順）
static SECOND_KEY_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap(),
        Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}").unwrap(),
        Regex::new(r"\d{2}:\d{2}:\d{2}").unwrap(),
    ]
});

fn first_match(patterns: &[Regex], line: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| pattern.find(line))
        .map(|m| m.as_str().to_string())
}

/// ミリ秒精度のタイムスタンプを抽出
pub fn extract_timestamp(line: &str) -> Option<String> {
    first_match(&*TIMESTAMP_PATTERNS, line)
}

/// 秒単位に切り詰めたグルーピングキーを抽出
pub fn extract_second_key(line: &str) -> Option<String> {
    first_match(&*SECOND_KEY_PATTERNS, line)
}

/// 1行を解析して [`LogRecord`] を生成
///
/// 全域関数：どんな入力でも成功し、マッチしないフィールドは None になる。
pub fn parse_line(line: &str, id: usize) -> LogRecord {
    LogRecord {
        id,
        content: line.to_string(),
        timestamp: extract_timestamp(line),
        level: LogLevel::detect(line),
        second_key: extract_second_key(line),
        original: line.to_string(),
    }
}
