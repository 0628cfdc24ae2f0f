//! 搜索引擎
//!
//! 穷举搜索到终局，提供两种算法：
//! - 纯 Minimax
//! - Minimax + Alpha-Beta 剪枝
//!
//! 两种算法共用同一个选点入口，方便对比耗时与节点数。

use serde::{Deserialize, Serialize};
use ttt_rules::{Board, GameContext, Move, Role, Score};

/// Alpha 初始值（负无穷）
pub const ALPHA_INIT: Score = i32::MIN + 1;

/// Beta 初始值（正无穷）
pub const BETA_INIT: Score = i32::MAX - 1;

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// 纯 Minimax，遍历整棵博弈树
    Minimax,
    /// Minimax + Alpha-Beta 剪枝
    AlphaBeta,
}

impl Algorithm {
    /// 显示名称
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        }
    }

    /// 所有算法
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Minimax, Algorithm::AlphaBeta]
    }
}

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub algorithm: Algorithm,
    pub context: GameContext,
}

impl AiConfig {
    pub fn new(algorithm: Algorithm, context: GameContext) -> Self {
        Self { algorithm, context }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new(Algorithm::AlphaBeta, GameContext::default())
    }
}

/// 搜索统计（只反映最近一次顶层调用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 访问的节点数（每次递归调用计一次）
    pub nodes: u64,
    /// 终局评估次数
    pub leaves: u64,
    /// 剪枝次数
    pub cutoffs: u64,
}

/// 顶层选点结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// 回溯得到的分值（Maximizer 视角）
    pub score: Score,
    /// 最佳走法；棋盘已满时为 None
    pub best_move: Option<Move>,
}

/// AI 引擎
///
/// 引擎本身不跨调用保存局面状态，只保存配置和最近一次的统计。
#[derive(Debug, Clone)]
pub struct AiEngine {
    pub(crate) config: AiConfig,
    pub(crate) stats: SearchStats,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// 使用默认上下文和指定算法创建
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::new(AiConfig::new(algorithm, GameContext::default()))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn context(&self) -> &GameContext {
        &self.config.context
    }

    /// 获取最近一次搜索的统计
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.stats.nodes
    }

    /// 纯 Minimax 评估局面
    pub fn minimax(&mut self, board: &Board, maximizing: bool) -> Score {
        self.stats = SearchStats::default();
        self.minimax_node(board, maximizing)
    }

    /// Alpha-Beta 评估局面，顶层调用应传入 `ALPHA_INIT` / `BETA_INIT`
    pub fn minimax_ab(&mut self, board: &Board, maximizing: bool, alpha: Score, beta: Score) -> Score {
        self.stats = SearchStats::default();
        self.alpha_beta_node(board, maximizing, alpha, beta)
    }

    /// 用配置的算法评估局面
    pub fn evaluate_position(&mut self, board: &Board, maximizing: bool) -> Score {
        self.stats = SearchStats::default();
        self.search_node(board, maximizing)
    }

    fn search_node(&mut self, board: &Board, maximizing: bool) -> Score {
        match self.config.algorithm {
            Algorithm::Minimax => self.minimax_node(board, maximizing),
            Algorithm::AlphaBeta => self.alpha_beta_node(board, maximizing, ALPHA_INIT, BETA_INIT),
        }
    }

    /// 为 AI（Maximizer）选择最佳走法
    pub fn best_move(&mut self, board: &Board) -> SearchOutcome {
        self.choose_move(board, Role::Maximizer)
    }

    /// 为指定角色选择最佳走法
    ///
    /// 按行优先顺序遍历空格，只有严格更优的分值才替换当前最佳，
    /// 所以同分时保留最先遇到的走法。
    pub fn choose_move(&mut self, board: &Board, role: Role) -> SearchOutcome {
        self.stats = SearchStats::default();
        let mark = self.config.context.mark_of(role);

        let mut best: Option<(Score, Move)> = None;
        for mv in board.available_moves() {
            let child = board.with_move(mv, mark);
            // 落子后轮到对方
            let score = self.search_node(&child, !role.is_maximizer());

            let better = match best {
                None => true,
                Some((best_score, _)) => match role {
                    Role::Maximizer => score > best_score,
                    Role::Minimizer => score < best_score,
                },
            };
            if better {
                best = Some((score, mv));
            }
        }

        let outcome = match best {
            Some((score, mv)) => SearchOutcome {
                score,
                best_move: Some(mv),
            },
            None => SearchOutcome {
                score: self.config.context.evaluate(board),
                best_move: None,
            },
        };

        tracing::debug!(
            "{} search for {:?}: move={:?} score={} nodes={} leaves={} cutoffs={}",
            self.config.algorithm.name(),
            role,
            outcome.best_move,
            outcome.score,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs
        );

        outcome
    }
}
