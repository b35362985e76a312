//! API のクエリパラメータとレスポンス型

use serde::{Deserialize, Serialize};

fn default_panel() -> String {
    "bt".to_string()
}

fn default_limit() -> usize {
    50
}

#[derive(Debug, Deserialize)]
pub struct LogsParams {
    #[serde(default = "default_panel")]
    pub panel: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub search: Option<String>,
    /// 指定された場合は offset / search を無視して秒フィルタに切り替わる
    pub second: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorsParams {
    #[serde(default = "default_panel")]
    pub panel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondsResponse {
    pub seconds: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_params_defaults() {
        let params: LogsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.panel, "bt");
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, 50);
        assert!(params.search.is_none());
        assert!(params.second.is_none());
    }
}
