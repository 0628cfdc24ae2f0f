//! 井字棋 AI 引擎
//!
//! 包含:
//! - 纯 Minimax 穷举搜索
//! - Minimax + Alpha-Beta 剪枝
//! - 统一的选点入口与搜索统计
//! - 自对弈

mod alphabeta;
mod minimax;
mod search;
mod selfplay;

pub use search::{
    AiConfig, AiEngine, Algorithm, SearchOutcome, SearchStats, ALPHA_INIT, BETA_INIT,
};
pub use selfplay::{play_game, self_play, MoveSource};
