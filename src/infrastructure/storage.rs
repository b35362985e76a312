//! ログファイルストレージ
//!
//! 行単位のストリーミング読み取りとパネル→ファイルパスの解決

pub mod line_source;
pub mod panel_directory;

pub use line_source::LineSource;
pub use panel_directory::PanelDirectory;
