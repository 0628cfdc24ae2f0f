//! 自对弈
//!
//! 双方各自通过 [`MoveSource`] 选点，轮流落子直到终局。

use ttt_rules::{Board, GameContext, GameRecord, Move, Result, Role};

use crate::search::{AiConfig, AiEngine};

/// 走法来源
pub trait MoveSource {
    /// 为 `role` 在 `board` 上选择走法；没有可走的格子时返回 None
    fn next_move(&mut self, board: &Board, role: Role) -> Option<Move>;
}

impl MoveSource for AiEngine {
    fn next_move(&mut self, board: &Board, role: Role) -> Option<Move> {
        self.choose_move(board, role).best_move
    }
}

/// 进行一局对局
///
/// 走法通过 `apply_move` 检查，来源给出已占用的格子时返回 `InvalidMove`。
pub fn play_game<A, B>(
    maximizer: &mut A,
    minimizer: &mut B,
    context: GameContext,
    start: Board,
    first: Role,
) -> Result<GameRecord>
where
    A: MoveSource + ?Sized,
    B: MoveSource + ?Sized,
{
    let mut record = GameRecord::new(context, &start);
    let mut board = start;
    let mut role = first;

    while !board.is_terminal() {
        let next = match role {
            Role::Maximizer => maximizer.next_move(&board, role),
            Role::Minimizer => minimizer.next_move(&board, role),
        };
        let Some(mv) = next else {
            break;
        };

        board = board.apply_move(mv, context.mark_of(role))?;
        record.push(role, mv, &board);
        tracing::trace!("{:?} plays {} -> {}", role, mv, record.final_board);

        role = role.opponent();
    }

    tracing::debug!(
        "game finished after {} moves: {:?}",
        record.moves.len(),
        record.outcome
    );
    Ok(record)
}

/// 双方使用相同配置的搜索引擎自对弈
pub fn self_play(config: AiConfig, start: Board, first: Role) -> Result<GameRecord> {
    let mut maximizer = AiEngine::new(config);
    let mut minimizer = AiEngine::new(config);
    play_game(&mut maximizer, &mut minimizer, config.context, start, first)
}
