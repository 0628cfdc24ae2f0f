//! 对局上下文：标记与角色的对应关系，以及终局评估

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{Score, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::mark::{Mark, Role};

/// 对局上下文
///
/// 指定 AI（Maximizer）和对手（Minimizer）各自使用的标记。
/// 两个标记始终不同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContextRepr", into = "ContextRepr")]
pub struct GameContext {
    ai: Mark,
    player: Mark,
}

/// 序列化形式，只保存 AI 的标记
#[derive(Serialize, Deserialize)]
struct ContextRepr {
    ai_mark: Mark,
}

impl From<ContextRepr> for GameContext {
    fn from(repr: ContextRepr) -> Self {
        GameContext::new(repr.ai_mark)
    }
}

impl From<GameContext> for ContextRepr {
    fn from(ctx: GameContext) -> Self {
        ContextRepr { ai_mark: ctx.ai }
    }
}

impl GameContext {
    /// 以 AI 标记创建，对手使用另一个标记
    pub fn new(ai: Mark) -> Self {
        Self {
            ai,
            player: ai.opponent(),
        }
    }

    /// AI 标记
    pub fn ai_mark(&self) -> Mark {
        self.ai
    }

    /// 对手标记
    pub fn player_mark(&self) -> Mark {
        self.player
    }

    /// 获取角色对应的标记
    pub fn mark_of(&self, role: Role) -> Mark {
        match role {
            Role::Maximizer => self.ai,
            Role::Minimizer => self.player,
        }
    }

    /// 获取标记对应的角色
    pub fn role_of(&self, mark: Mark) -> Role {
        if mark == self.ai {
            Role::Maximizer
        } else {
            Role::Minimizer
        }
    }

    /// 交换双方角色
    pub fn swapped(&self) -> Self {
        Self::new(self.player)
    }

    /// 获胜的角色（如果有）
    pub fn winner(&self, board: &Board) -> Option<Role> {
        board.winning_mark().map(|mark| self.role_of(mark))
    }

    /// 评估局面（Maximizer 视角）
    ///
    /// 只应在终局调用；非终局局面同样返回 0。
    pub fn evaluate(&self, board: &Board) -> Score {
        match self.winner(board) {
            Some(Role::Maximizer) => WIN_SCORE,
            Some(Role::Minimizer) => LOSS_SCORE,
            None => DRAW_SCORE,
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}
