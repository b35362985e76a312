//! パネル値オブジェクト
//!
//! ビューアが並べて表示する3つの固定ログソースの識別子

use super::logs::errors::LogAccessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 固定された3つのパネル識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Bt,
    Rs,
    Out,
}

impl Panel {
    /// 全パネル（集計系エンドポイントの走査順）
    pub const ALL: [Panel; 3] = [Panel::Bt, Panel::Rs, Panel::Out];

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Bt => "bt",
            Panel::Rs => "rs",
            Panel::Out => "out",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Panel {
    type Err = LogAccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bt" => Ok(Panel::Bt),
            "rs" => Ok(Panel::Rs),
            "out" => Ok(Panel::Out),
            other => Err(LogAccessError::UnknownPanel(other.to_string())),
        }
    }
}
