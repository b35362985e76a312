//! 行ソース
//!
//! ログファイルを1パスで走査する遅延的な行イテレータ。ファイル全体を
//! メモリに載せず、1行分のバッファだけを使い回す。

use crate::domain::logs::errors::LogAccessError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

/// ログファイルの行を `(物理行番号, テキスト)` として順に返す読み取り器
///
/// - 1パス・有限・巻き戻し不可。先頭から読み直すには再度 `open` する。
/// - UTF-8として不正なバイト列は置換文字に差し替え、読み取り自体は失敗させない。
/// - 読み取り途中のI/O障害は走査の打ち切りとして扱う。呼び出し側には
///   それまでの部分結果が残る（集計系操作の部分結果ポリシー）。
#[derive(Debug)]
pub struct LineSource {
    reader: BufReader<File>,
    path: PathBuf,
    next_line: usize,
    buf: Vec<u8>,
    done: bool,
}

impl LineSource {
    /// ファイルを開いて行ソースを作る
    ///
    /// 存在しない・開けないファイルは `FileNotFound` として呼び出し側に返す。
    pub fn open(path: &Path) -> Result<Self, LogAccessError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LogAccessError::FileNotFound(path.to_path_buf()),
            _ => LogAccessError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(Self {
            reader: BufReader::new(file),
            path: path.to_path_buf(),
            next_line: 0,
            buf: Vec::new(),
            done: false,
        })
    }

    /// 次の1行を内部バッファに読み込む。末尾の `\n`/`\r` は除去する。
    ///
    /// EOFまたは読み取り障害で `false` を返し、以降の走査を終了する。
    fn fill_next(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                false
            }
            Ok(_) => {
                while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
                    self.buf.pop();
                }
                true
            }
            Err(e) => {
                // 部分結果ポリシー：障害はここで飲み込み、走査を打ち切る
                warn!(path = %self.path.display(), error = %e, "Read fault, aborting scan");
                self.done = true;
                false
            }
        }
    }

    /// 空でない行を `n` 行、デコードせずに読み飛ばす
    ///
    /// 空行は読み捨てるだけでカウントしない。実際に読み飛ばせた行数を返す
    /// （EOFに達した場合は `n` 未満になる）。
    pub fn skip_non_blank(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n {
            if !self.fill_next() {
                break;
            }
            self.next_line += 1;
            if !self.buf.is_empty() {
                skipped += 1;
            }
        }
        skipped
    }
}

impl Iterator for LineSource {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.fill_next() {
            return None;
        }
        let line_number = self.next_line;
        self.next_line += 1;
        Some((line_number, String::from_utf8_lossy(&self.buf).into_owned()))
    }
}
