//! 秒キー抽出クエリ

use crate::domain::logs::errors::LogAccessError;
use crate::domain::logs::services::extract_second_key;
use crate::infrastructure::storage::LineSource;
use std::collections::BTreeSet;
use std::path::Path;

/// ファイルに現れる秒キーの集合を返す
///
/// `BTreeSet` なので重複なし・文字列昇順。キー形式では辞書順が時系列順と
/// 一致するため、そのままビューアのタイムラインに使える。
pub fn distinct_seconds(path: &Path) -> Result<BTreeSet<String>, LogAccessError> {
    let source = LineSource::open(path)?;

    let mut seconds = BTreeSet::new();
    for (_, text) in source {
        if let Some(second) = extract_second_key(&text) {
            seconds.insert(second);
        }
    }
    Ok(seconds)
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
    fn test_sorted_and_deduplicated() {
        let file = fixture(
            "10:15:31.000 later\n10:15:30.000 a\n10:15:30.500 same second\nno time\n10:15:29.000 first\n",
        );
        let seconds: Vec<_> = distinct_seconds(file.path()).unwrap().into_iter().collect();
        assert_eq!(seconds, vec!["10:15:29", "10:15:30", "10:15:31"]);
    }

    #[test]
    fn test_lines_without_key_are_ignored() {
        let file = fixture("nothing here\nstill nothing\n");
        assert!(distinct_seconds(file.path()).unwrap().is_empty());
    }
}
