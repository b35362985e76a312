use std::path::PathBuf;
use thiserror::Error;

/// ログアクセス操作のエラー
///
/// ファイルが開けない場合のみエラーとする。読み取り途中の障害はスキャンを
/// 打ち切り、それまでに収集した部分結果を返す方針（`LineSource` 参照）。
#[derive(Error, Debug)]
pub enum LogAccessError {
    #[error("Log file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    #[error("Failed to read log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogAccessError {
    /// 「リソースが見つからない」扱いにすべきエラーかどうか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LogAccessError::FileNotFound(_) | LogAccessError::UnknownPanel(_)
        )
    }
}
