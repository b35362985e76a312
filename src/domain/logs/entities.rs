//! ログレコードエンティティ
//!
//! ビューアに返す行単位のレコードと集計結果の定義

use super::value_objects::LogLevel;
use serde::{Deserialize, Serialize};

/// 解析済みのログ1行
///
/// リクエストごとに生成され、レスポンス送信後に破棄される。永続化はしない。
/// `content` と `original` は意図的に同一の値を持つ（ビューア側が片方を
/// 加工しても原文が残るようにするためのインターフェース互換）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// ゼロ始まりのシーケンスID。採番規則は操作ごとに異なる点に注意：
    /// ページングではページ相対、秒フィルタ・全文検索・エラー位置では
    /// ファイル内の物理行番号。
    pub id: usize,
    /// 末尾の改行を除去した行テキスト
    pub content: String,
    /// 最初にマッチしたタイムスタンプ（ミリ秒精度まで）。無ければ null
    pub timestamp: Option<String>,
    /// 重大度分類
    pub level: LogLevel,
    /// 秒単位に切り詰めたキー。パネル間の時刻相関に使う。無ければ null
    pub second_key: Option<String>,
    /// `content` と同一の原文
    pub original: String,
}

/// レベル別の行数集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub error: u64,
    pub warning: u64,
    pub info: u64,
    pub normal: u64,
}

impl LevelCounts {
    /// 1行分を集計に加える
    pub fn record(&mut self, level: LogLevel) {
        match level {
            LogLevel::Error => self.error += 1,
            LogLevel::Warning => self.warning += 1,
            LogLevel::Info => self.info += 1,
            LogLevel::Normal => self.normal += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.error + self.warning + self.info + self.normal
    }
}

/// ログファイル1つ分の統計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    /// 空行を含む物理行数
    pub total_lines: u64,
    /// レベル別行数。空行は normal に分類される
    pub level_counts: LevelCounts,
    /// ファイルサイズ（バイト）
    pub file_size: u64,
}

/// スクロールバーのインジケータ用のエラー・警告位置
///
/// `line_number` と `offset` はどちらもゼロ始まりの物理行番号で、値は常に
/// 等しい。ビューア側のインターフェース互換のため2フィールドのまま返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPosition {
    pub line_number: usize,
    pub level: LogLevel,
    pub offset: usize,
}
