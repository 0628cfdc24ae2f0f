//! 纯 Minimax 搜索
//!
//! 不剪枝，遍历整棵剩余博弈树，作为剪枝效率的基准。

use ttt_rules::{Board, Role, Score};

use crate::search::AiEngine;

impl AiEngine {
    pub(crate) fn minimax_node(&mut self, board: &Board, maximizing: bool) -> Score {
        self.stats.nodes += 1;

        // 终局：直接评估。递归深度不超过空格数
        if board.is_terminal() {
            self.stats.leaves += 1;
            return self.config.context.evaluate(board);
        }

        let role = Role::from_maximizing(maximizing);
        let mark = self.config.context.mark_of(role);

        let mut best_score = if maximizing { Score::MIN } else { Score::MAX };
        for mv in board.available_moves() {
            // 每个分支使用独立的棋盘副本
            let child = board.with_move(mv, mark);
            let score = self.minimax_node(&child, !maximizing);

            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }
}
