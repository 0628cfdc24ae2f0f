//! 对比测试配置
//!
//! 从 JSON 文件加载，缺省字段使用默认值

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ttt_ai::Algorithm;
use ttt_rules::{Board, BoardText, GameContext, Mark, RuleError};

/// 默认局面：(0,0)、(0,1) 为对手，(1,1) 为 AI
pub const DEFAULT_BOARD: &str = "XX./.O./...";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读取文件失败
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析失败
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// 棋盘无效
    #[error("Invalid board in config: {0}")]
    Board(#[from] RuleError),

    /// 没有选择任何算法
    #[error("No algorithm selected")]
    NoAlgorithm,

    /// 重复次数为 0
    #[error("Repeat count must be at least 1")]
    ZeroRepeats,
}

/// 对比测试配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// 局面（文本格式）
    pub board: String,
    /// AI 使用的标记
    pub ai_mark: Mark,
    /// 参与对比的算法
    pub algorithms: Vec<Algorithm>,
    /// 每种算法重复计时的次数
    pub repeats: u32,
    /// 是否在对比后从空棋盘自对弈一局
    pub self_play: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            board: DEFAULT_BOARD.to_string(),
            ai_mark: Mark::O,
            algorithms: Algorithm::all().to_vec(),
            repeats: 1,
            self_play: true,
        }
    }
}

impl BenchConfig {
    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: BenchConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parse_board()?;
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithm);
        }
        if self.repeats == 0 {
            return Err(ConfigError::ZeroRepeats);
        }
        Ok(())
    }

    /// 解析并校验局面
    pub fn parse_board(&self) -> Result<Board, ConfigError> {
        let board = BoardText::parse(&self.board)?;
        board.validate()?;
        Ok(board)
    }

    pub fn context(&self) -> GameContext {
        GameContext::new(self.ai_mark)
    }
}
