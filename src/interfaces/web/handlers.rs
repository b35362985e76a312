use super::error_response::ApiError;
use super::models::{ErrorsParams, LogsParams, SearchParams, SecondsResponse};
use crate::application::queries::{
    Page, distinct_seconds, error_positions, file_stats, filter_by_second, paged_list, search_all,
};
use crate::domain::logs::entities::{ErrorPosition, FileStats, LogRecord};
use crate::domain::panel::Panel;
use crate::infrastructure::storage::PanelDirectory;
use axum::{
    Json,
    extract::{Query, State},
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// ハンドラ間で共有する静的な設定
///
/// リクエストごとの可変状態は持たない。各リクエストはファイルを開き直して
/// 最初から走査する。
#[derive(Debug, Clone)]
pub struct AppState {
    pub panels: PanelDirectory,
}

/// `GET /api/logs`: ページング付きの一覧、または秒フィルタ
pub async fn get_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogsParams>,
) -> Result<Json<Page>, ApiError> {
    let panel: Panel = params.panel.parse()?;
    let path = state.panels.resolve(panel);

    // second の指定は offset / search より優先される
    let page = match params.second.as_deref().filter(|s| !s.is_empty()) {
        Some(second) => {
            let lines = filter_by_second(&path, second, params.limit)?;
            Page {
                has_more: lines.len() == params.limit,
                lines,
                offset: params.offset,
                limit: params.limit,
            }
        }
        None => paged_list(&path, params.offset, params.limit, params.search.as_deref())?,
    };

    Ok(Json(page))
}

/// `GET /api/search`: 全パネル横断の検索
pub async fn search_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<BTreeMap<Panel, Vec<LogRecord>>>, ApiError> {
    let term = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Search term required".to_string()))?;

    Ok(Json(search_all(&state.panels, &term)))
}

/// `GET /api/seconds`: 全パネルに現れる秒キーの昇順和集合
pub async fn get_seconds(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SecondsResponse>, ApiError> {
    let mut seconds = BTreeSet::new();
    for panel in Panel::ALL {
        let path = state.panels.resolve(panel);
        match distinct_seconds(&path) {
            Ok(file_seconds) => seconds.extend(file_seconds),
            Err(e) if e.is_not_found() => {
                debug!(panel = %panel, "Panel file absent, skipping for seconds");
            }
            Err(e) => {
                // 1ファイルの障害で集計全体を空にしない
                warn!(panel = %panel, error = %e, "Failed to extract seconds");
            }
        }
    }

    Ok(Json(SecondsResponse {
        seconds: seconds.into_iter().collect(),
    }))
}

/// `GET /api/stats`: パネルごとのファイル統計。欠けているパネルは省かれる
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<Panel, FileStats>>, ApiError> {
    let mut stats = BTreeMap::new();
    for panel in Panel::ALL {
        let path = state.panels.resolve(panel);
        match file_stats(&path) {
            Ok(file) => {
                stats.insert(panel, file);
            }
            Err(e) if e.is_not_found() => {
                debug!(panel = %panel, "Panel file absent, skipping for stats");
            }
            Err(e) => {
                warn!(panel = %panel, error = %e, "Failed to compute stats");
            }
        }
    }
    Ok(Json(stats))
}

/// `GET /api/errors`: スクロールバー用のエラー・警告位置インデックス
pub async fn get_errors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ErrorsParams>,
) -> Result<Json<Vec<ErrorPosition>>, ApiError> {
    let panel: Panel = params.panel.parse()?;
    let path = state.panels.resolve(panel);
    let positions = error_positions(&path)?;
    Ok(Json(positions))
}
