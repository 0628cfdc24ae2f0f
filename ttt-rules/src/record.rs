//! 对局记录格式
//!
//! 支持 JSON 格式保存，便于对比不同搜索算法的对局

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{Score, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::context::GameContext;
use crate::error::{Result, RuleError};
use crate::mark::{Mark, Move, Role};
use crate::notation::BoardText;

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// 一方连成一线
    Win(Role),
    /// 棋盘下满，无人获胜
    Draw,
    /// 尚未终局
    Unfinished,
}

impl GameOutcome {
    /// 从局面判定结果
    pub fn from_board(ctx: &GameContext, board: &Board) -> Self {
        match ctx.winner(board) {
            Some(role) => GameOutcome::Win(role),
            None if board.is_full() => GameOutcome::Draw,
            None => GameOutcome::Unfinished,
        }
    }

    /// 结果对应的分值（Maximizer 视角），未终局按 0 计
    pub fn score(&self) -> Score {
        match self {
            GameOutcome::Win(Role::Maximizer) => WIN_SCORE,
            GameOutcome::Win(Role::Minimizer) => LOSS_SCORE,
            GameOutcome::Draw | GameOutcome::Unfinished => DRAW_SCORE,
        }
    }
}

/// 走法记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub role: Role,
    pub mark: Mark,
    pub row: u8,
    pub col: u8,
}

impl MoveRecord {
    /// 创建新的走法记录
    pub fn new(role: Role, mark: Mark, mv: Move) -> Self {
        Self {
            role,
            mark,
            row: mv.row,
            col: mv.col,
        }
    }

    /// 获取走法
    pub fn to_move(&self) -> Option<Move> {
        Move::new(self.row, self.col)
    }
}

/// 完整的对局记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 对局上下文
    pub context: GameContext,
    /// 初始局面（文本格式）
    pub initial: String,
    /// 走法列表
    pub moves: Vec<MoveRecord>,
    /// 最终局面（文本格式）
    pub final_board: String,
    /// 对局结果
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// 从初始局面创建
    pub fn new(context: GameContext, initial: &Board) -> Self {
        let text = BoardText::to_string(initial);
        Self {
            context,
            initial: text.clone(),
            moves: Vec::new(),
            final_board: text,
            outcome: GameOutcome::from_board(&context, initial),
        }
    }

    /// 记录一步走法，并更新最终局面和结果
    pub fn push(&mut self, role: Role, mv: Move, board_after: &Board) {
        let mark = self.context.mark_of(role);
        self.moves.push(MoveRecord::new(role, mark, mv));
        self.final_board = BoardText::to_string(board_after);
        self.outcome = GameOutcome::from_board(&self.context, board_after);
    }

    /// 重放走法，得到最终棋盘
    pub fn replay(&self) -> Result<Board> {
        let mut board = BoardText::parse(&self.initial)?;
        for record in &self.moves {
            let mv = record.to_move().ok_or_else(|| RuleError::InvalidBoard {
                reason: format!("move ({}, {}) is off the board", record.row, record.col),
            })?;
            board = board.apply_move(mv, record.mark)?;
        }
        Ok(board)
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
