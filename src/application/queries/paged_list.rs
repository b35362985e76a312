//! ページング付き一覧クエリ

use crate::domain::logs::entities::LogRecord;
use crate::domain::logs::errors::LogAccessError;
use crate::domain::logs::services::parse_line;
use crate::infrastructure::storage::LineSource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ページング結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub lines: Vec<LogRecord>,
    pub offset: usize,
    pub limit: usize,
    /// `lines.len() == limit` による近似値。ファイルにちょうど limit 行
    /// しか残っていなかった場合も true になる。「まだ読める行が確実にある」
    /// ことまでは保証しない。ビューア側はこの近似を前提にしている。
    pub has_more: bool,
}

/// ログを `offset` / `limit` でページングして返す
///
/// 空でない行を `offset` 行読み飛ばしたあと、空でなく（`search` があれば）
/// それを大文字小文字を区別せず含む行を最大 `limit` 件集める。
///
/// レコードの `id` は `offset + ページ内で採用済みの件数` であり、ファイル内の
/// 物理行番号ではない。絶対行番号を使う他のクエリとは採番規則が異なるが、
/// ビューア側が依存しているためこの規則を維持する。
pub fn paged_list(
    path: &Path,
    offset: usize,
    limit: usize,
    search: Option<&str>,
) -> Result<Page, LogAccessError> {
    let mut source = LineSource::open(path)?;
    source.skip_non_blank(offset);

    let needle = search
        .map(str::to_lowercase)
        .filter(|term| !term.is_empty());

    let mut lines = Vec::new();
    // limit が 0 のときは1行も採用しない（has_more は 0 == 0 で true になる）
    if limit > 0 {
        for (_, text) in &mut source {
            if text.is_empty() {
                continue;
            }
            if let Some(term) = &needle {
                if !text.to_lowercase().contains(term.as_str()) {
                    continue;
                }
            }
            let record = parse_line(&text, offset + lines.len());
            lines.push(record);
            if lines.len() >= limit {
                break;
            }
        }
    }

    let has_more = lines.len() == limit;
    Ok(Page {
        lines,
        offset,
        limit,
        has_more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logs::value_objects::LogLevel;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_basic_pagination() {
        let file = fixture("line0\nline1\nline2\nline3\nline4\n");
        let page = paged_list(file.path(), 1, 2, None).unwrap();
        assert_eq!(page.lines.len(), 2);
        assert_eq!(page.lines[0].content, "line1");
        assert_eq!(page.lines[1].content, "line2");
        assert!(page.has_more);
        assert_eq!(page.offset, 1);
        assert_eq!(page.limit, 2);
    }

    #[test]
    fn test_ids_are_page_relative() {
        let file = fixture("a\nb\nc\nd\n");
        let page = paged_list(file.path(), 2, 2, None).unwrap();
        // id は offset + ページ内の採用件数であって物理行番号ではない
        assert_eq!(page.lines[0].id, 2);
        assert_eq!(page.lines[1].id, 3);
    }

    #[test]
    fn test_search_keeps_page_relative_ids() {
        let file = fixture("noise\nERROR one\nnoise\nERROR two\nnoise\n");
        let page = paged_list(file.path(), 0, 10, Some("error")).unwrap();
        assert_eq!(page.lines.len(), 2);
        // フィルタ後も採用順で連番になる
        assert_eq!(page.lines[0].id, 0);
        assert_eq!(page.lines[1].id, 1);
        assert_eq!(page.lines[0].level, LogLevel::Error);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let file = fixture("Sensor OK\nsensor FAIL\nother\n");
        let page = paged_list(file.path(), 0, 50, Some("SENSOR")).unwrap();
        assert_eq!(page.lines.len(), 2);
    }

    #[test]
    fn test_blank_lines_are_not_counted_by_offset() {
        let file = fixture("a\n\n\nb\nc\n");
        // 空行はオフセットを消費しない
        let page = paged_list(file.path(), 1, 10, None).unwrap();
        assert_eq!(page.lines[0].content, "b");
        assert_eq!(page.lines[1].content, "c");
    }

    #[test]
    fn test_blank_lines_are_dropped_from_results() {
        let file = fixture("a\n\nb\n");
        let page = paged_list(file.path(), 0, 10, None).unwrap();
        let contents: Vec<_> = page.lines.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[test]
    fn test_has_more_is_an_approximation() {
        // ちょうど offset+limit 行で尽きるファイルでも has_more は true
        let file = fixture("a\nb\nc\nd\n");
        let page = paged_list(file.path(), 2, 2, None).unwrap();
        assert_eq!(page.lines.len(), 2);
        assert!(page.has_more);

        // 1行でも足りなければ false
        let page = paged_list(file.path(), 2, 3, None).unwrap();
        assert_eq!(page.lines.len(), 2);
        assert!(!page.has_more);
    }

    #[test]
    fn test_zero_limit_returns_empty_page() {
        let file = fixture("a\nb\n");
        let page = paged_list(file.path(), 0, 0, None).unwrap();
        assert!(page.lines.is_empty());
        // len == limit の近似により、空ページでも has_more は true になる
        assert!(page.has_more);
    }

    #[test]
    fn test_idempotent_for_unmodified_file() {
        let file = fixture("10:00:01.000 info a\n10:00:02.000 warn b\nplain\n");
        let first = paged_list(file.path(), 0, 2, Some("0")).unwrap();
        let second = paged_list(file.path(), 0, 2, Some("0")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_search_means_no_filter() {
        let file = fixture("a\nb\n");
        let page = paged_list(file.path(), 0, 10, Some("")).unwrap();
        assert_eq!(page.lines.len(), 2);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = paged_list(Path::new("/no/such/file.txt"), 0, 50, None).unwrap_err();
        assert!(err.is_not_found());
    }
}
