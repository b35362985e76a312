//! インターフェース層
//!
//! 外部との境界（Web API）

pub mod web;
