//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug)]
pub enum RuleError {
    /// 目标格子已被占用
    #[error("Invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: u8, col: u8 },

    /// 无效的棋盘（尺寸、字符或棋子数量不合法）
    #[error("Invalid board: {reason}")]
    InvalidBoard { reason: String },

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, RuleError>;
