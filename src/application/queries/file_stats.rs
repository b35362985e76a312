//! ファイル統計クエリ

use crate::domain::logs::entities::{FileStats, LevelCounts};
use crate::domain::logs::errors::LogAccessError;
use crate::domain::logs::value_objects::LogLevel;
use crate::infrastructure::storage::LineSource;
use std::fs;
use std::path::Path;

/// ログファイルの統計を集計する
///
/// `total_lines` は空行を含む物理行数。レベル別集計もすべての物理行を
/// 対象とし、空行は normal に分類される。ファイルは1パスでストリーム
/// 集計し、全行をメモリに載せることはない。
pub fn file_stats(path: &Path) -> Result<FileStats, LogAccessError> {
    let file_size = fs::metadata(path)
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LogAccessError::FileNotFound(path.to_path_buf()),
            _ => LogAccessError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?
        .len();

    let source = LineSource::open(path)?;

    let mut total_lines = 0u64;
    let mut level_counts = LevelCounts::default();
    for (_, text) in source {
        total_lines += 1;
        level_counts.record(LogLevel::detect(&text));
    }

    Ok(FileStats {
        total_lines,
        level_counts,
        file_size,
    })
}
