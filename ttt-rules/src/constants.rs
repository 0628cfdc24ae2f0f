//! 规则常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 所有连线（3 行、3 列、2 条对角线），元素为格子索引 row * 3 + col
pub const LINES: [[usize; 3]; 8] = [
    // 行
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // 列
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // 对角线
    [0, 4, 8],
    [2, 4, 6],
];

/// 分值类型（Maximizer 视角）
pub type Score = i32;

/// Maximizer 获胜
pub const WIN_SCORE: Score = 1;

/// 和棋（或非终局）
pub const DRAW_SCORE: Score = 0;

/// Minimizer 获胜
pub const LOSS_SCORE: Score = -1;
