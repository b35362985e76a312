//! 秒キーによるフィルタクエリ

use crate::domain::logs::entities::LogRecord;
use crate::domain::logs::errors::LogAccessError;
use crate::domain::logs::services::{extract_second_key, parse_line};
use crate::infrastructure::storage::LineSource;
use std::path::Path;

/// 秒キーが `second` と完全一致する行をファイル先頭から最大 `limit` 件返す
///
/// パネル間の時刻相関表示に使う。`id` はファイル内のゼロ始まり物理行番号
/// （ページングとは異なる採番規則。意図的に区別を維持している）。
pub fn filter_by_second(
    path: &Path,
    second: &str,
    limit: usize,
) -> Result<Vec<LogRecord>, LogAccessError> {
    let source = LineSource::open(path)?;

    let mut lines = Vec::new();
    for (line_number, text) in source {
        if text.is_empty() {
            continue;
        }
        if extract_second_key(&text).as_deref() == Some(second) {
            lines.push(parse_line(&text, line_number));
            if lines.len() >= limit {
                break;
            }
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_exact_second_match() {
        let file = fixture(
            "10:15:29.900 before\n10:15:30.000 a\nno timestamp\n10:15:30.500 b\n10:15:31.000 after\n",
        );
        let lines = filter_by_second(file.path(), "10:15:30", 50).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].content, "10:15:30.000 a");
        assert_eq!(lines[1].content, "10:15:30.500 b");
    }

    #[test]
    fn test_ids_are_absolute_line_numbers() {
        let file = fixture("x\n\n10:15:30.000 hit\n");
        let lines = filter_by_second(file.path(), "10:15:30", 50).unwrap();
        // 空行も物理行番号を消費する
        assert_eq!(lines[0].id, 2);
    }

    #[test]
    fn test_limit_caps_results() {
        let mut content = String::new();
        for i in 0..10 {
            content.push_str(&format!("10:15:30.{:03} line\n", i));
        }
        let file = fixture(&content);
        let lines = filter_by_second(file.path(), "10:15:30", 3).unwrap();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let file = fixture("10:15:30.000 a\n");
        let lines = filter_by_second(file.path(), "23:59:59", 50).unwrap();
        assert!(lines.is_empty());
    }
}
