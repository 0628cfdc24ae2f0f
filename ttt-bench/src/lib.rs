//! 井字棋搜索对比工具
//!
//! 包含:
//! - 对比配置加载
//! - Minimax 与 Alpha-Beta 的耗时、节点数对比

pub mod compare;
pub mod config;

pub use compare::{compare, AlgorithmResult, ComparisonReport};
pub use config::{BenchConfig, ConfigError, DEFAULT_BOARD};
