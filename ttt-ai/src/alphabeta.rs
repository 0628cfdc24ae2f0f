//! Alpha-Beta 剪枝搜索
//!
//! 与纯 Minimax 结构相同，只在 `beta <= alpha` 时跳过剩余兄弟节点。
//! 顶层以全窗口调用时，返回值与纯 Minimax 完全一致。

use ttt_rules::{Board, Role, Score};

use crate::search::AiEngine;

impl AiEngine {
    pub(crate) fn alpha_beta_node(
        &mut self,
        board: &Board,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if board.is_terminal() {
            self.stats.leaves += 1;
            return self.config.context.evaluate(board);
        }

        let mark = self.config.context.mark_of(Role::from_maximizing(maximizing));
        let moves = board.available_moves();

        if maximizing {
            let mut best_score = Score::MIN;
            for (i, mv) in moves.iter().enumerate() {
                let child = board.with_move(*mv, mark);
                let score = self.alpha_beta_node(&child, false, alpha, beta);

                best_score = best_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    // Beta 剪枝
                    if i + 1 < moves.len() {
                        self.stats.cutoffs += 1;
                    }
                    break;
                }
            }
            best_score
        } else {
            let mut best_score = Score::MAX;
            for (i, mv) in moves.iter().enumerate() {
                let child = board.with_move(*mv, mark);
                let score = self.alpha_beta_node(&child, true, alpha, beta);

                best_score = best_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    // Alpha 剪枝
                    if i + 1 < moves.len() {
                        self.stats.cutoffs += 1;
                    }
                    break;
                }
            }
            best_score
        }
    }
}
