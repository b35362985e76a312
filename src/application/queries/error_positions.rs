//! エラー位置インデックスクエリ

use crate::domain::logs::entities::ErrorPosition;
use crate::domain::logs::errors::LogAccessError;
use crate::domain::logs::value_objects::LogLevel;
use crate::infrastructure::storage::LineSource;
use std::path::Path;

/// error / warning の行位置をファイル順で返す
///
/// ビューアのスクロールバーにインジケータを描くためのインデックス。
/// `line_number` と `offset` はどちらもゼロ始まりの物理行番号。
pub fn error_positions(path: &Path) -> Result<Vec<ErrorPosition>, LogAccessError> {
    let source = LineSource::open(path)?;

    let mut positions = Vec::new();
    for (line_number, text) in source {
        if text.is_empty() {
            continue;
        }
        let level = LogLevel::detect(&text);
        if level.is_notable() {
            positions.push(ErrorPosition {
                line_number,
                level,
                offset: line_number,
            });
        }
    }
    Ok(positions)
}
