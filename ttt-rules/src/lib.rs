//! 井字棋规则库
//!
//! 包含:
//! - 标记、角色、坐标等核心数据结构
//! - 棋盘、走法生成和终局判定
//! - 对局上下文与终局评估
//! - 棋盘文本格式与对局记录

mod board;
mod constants;
mod context;
mod error;
mod mark;
mod notation;
mod record;

pub use board::Board;
pub use constants::*;
pub use context::GameContext;
pub use error::{Result, RuleError};
pub use mark::{Mark, Move, Role};
pub use notation::BoardText;
pub use record::{GameOutcome, GameRecord, MoveRecord};
