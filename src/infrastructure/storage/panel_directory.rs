//! パネルディレクトリ
//!
//! パネル識別子からログファイルパスへの静的な対応付け

use crate::domain::panel::Panel;
use std::path::{Path, PathBuf};

/// パネル→ファイルパスの解決器
///
/// 対応付けは起動時に決まる静的な設定であり、リクエスト状態には依存しない。
/// ファイル名の規約は取得元システムに合わせてパネルごとに異なる
/// （`out` だけ日付がハイフンなし）。
#[derive(Debug, Clone)]
pub struct PanelDirectory {
    root: PathBuf,
    date: String,
}

impl PanelDirectory {
    pub fn new(root: impl Into<PathBuf>, date: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            date: date.into(),
        }
    }

    /// パネルに対応するログファイルのパスを返す
    ///
    /// ファイルの存在は確認しない。存在チェックは各操作が開くときに行う。
    pub fn resolve(&self, panel: Panel) -> PathBuf {
        let file_name = match panel {
            Panel::Bt => format!("bt_log_{}.txt", self.date),
            Panel::Rs => format!("rs_log_{}.txt", self.date),
            Panel::Out => format!("out.log{}.txt", self.date.replace('-', "")),
        };
        self.root.join(file_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_file_names() {
        let dir = PanelDirectory::new("data", "2025-06-02");
        assert_eq!(
            dir.resolve(Panel::Bt),
            PathBuf::from("data/bt_log_2025-06-02.txt")
        );
        assert_eq!(
            dir.resolve(Panel::Rs),
            PathBuf::from("data/rs_log_2025-06-02.txt")
        );
        // out だけ日付がハイフンなしの形式
        assert_eq!(
            dir.resolve(Panel::Out),
            PathBuf::from("data/out.log20250602.txt")
        );
    }
}
