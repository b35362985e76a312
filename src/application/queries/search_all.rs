//! 全パネル横断検索クエリ

use crate::domain::logs::entities::LogRecord;
use crate::domain::logs::errors::LogAccessError;
use crate::domain::logs::services::parse_line;
use crate::domain::panel::Panel;
use crate::infrastructure::storage::{LineSource, PanelDirectory};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// 1パネルあたりの検索結果の上限。最悪ケースのレイテンシを抑えるための
/// ハードキャップで、超過分は黙って切り捨てる。
pub const SEARCH_RESULT_CAP: usize = 100;

/// 全パネルを対象に大文字小文字を区別しない部分文字列検索を行う
///
/// ファイルが存在しないパネルは結果マップから省かれる（空の結果としては
/// 報告しない）。`id` はゼロ始まりの物理行番号。
pub fn search_all(panels: &PanelDirectory, term: &str) -> BTreeMap<Panel, Vec<LogRecord>> {
    let mut results = BTreeMap::new();
    for panel in Panel::ALL {
        let path = panels.resolve(panel);
        match search_in_file(&path, term) {
            Ok(matches) => {
                results.insert(panel, matches);
            }
            Err(e) if e.is_not_found() => {
                // 欠けているパネルは結果から省く
            }
            Err(e) => {
                warn!(panel = %panel, error = %e, "Search failed for panel, omitting it");
            }
        }
    }
    results
}

fn search_in_file(path: &Path, term: &str) -> Result<Vec<LogRecord>, LogAccessError> {
    let needle = term.to_lowercase();
    let source = LineSource::open(path)?;

    let mut matches = Vec::new();
    for (line_number, text) in source {
        if text.to_lowercase().contains(needle.as_str()) {
            matches.push(parse_line(&text, line_number));
            if matches.len() >= SEARCH_RESULT_CAP {
                break;
            }
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn panel_fixture(files: &[(&str, &str)]) -> (TempDir, PanelDirectory) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let panels = PanelDirectory::new(dir.path(), "2025-06-02");
        (dir, panels)
    }

    #[test]
    fn test_search_across_panels() {
        let (_dir, panels) = panel_fixture(&[
            ("bt_log_2025-06-02.txt", "spindle ok\nSPINDLE stall\n"),
            ("rs_log_2025-06-02.txt", "nothing relevant\n"),
            ("out.log20250602.txt", "spindle recovered\n"),
        ]);
        let results = search_all(&panels, "spindle");
        assert_eq!(results[&Panel::Bt].len(), 2);
        assert_eq!(results[&Panel::Rs].len(), 0);
        assert_eq!(results[&Panel::Out].len(), 1);
        // id は物理行番号
        assert_eq!(results[&Panel::Bt][1].id, 1);
    }

    #[test]
    fn test_missing_panel_is_omitted() {
        let (_dir, panels) = panel_fixture(&[("bt_log_2025-06-02.txt", "hit\n")]);
        let results = search_all(&panels, "hit");
        assert!(results.contains_key(&Panel::Bt));
        assert!(!results.contains_key(&Panel::Rs));
        assert!(!results.contains_key(&Panel::Out));
    }

    #[test]
    fn test_results_are_capped_at_100() {
        let content = "needle\n".repeat(250);
        let (_dir, panels) = panel_fixture(&[("bt_log_2025-06-02.txt", &content)]);
        let results = search_all(&panels, "needle");
        assert_eq!(results[&Panel::Bt].len(), SEARCH_RESULT_CAP);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (_dir, panels) = panel_fixture(&[("bt_log_2025-06-02.txt", "Fatal ERROR\n")]);
        let results = search_all(&panels, "fatal error");
        assert_eq!(results[&Panel::Bt].len(), 1);
    }
}
