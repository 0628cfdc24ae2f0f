//! 棋子标记、角色与坐标定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 棋子标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 搜索中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// AI，取子节点最大值
    Maximizer,
    /// 对手，取子节点最小值
    Minimizer,
}

impl Role {
    /// 获取对方角色
    pub fn opponent(&self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    pub fn is_maximizer(&self) -> bool {
        matches!(self, Role::Maximizer)
    }

    /// 从 "是否轮到 Maximizer" 标志转换
    pub fn from_maximizing(maximizing: bool) -> Role {
        if maximizing {
            Role::Maximizer
        } else {
            Role::Minimizer
        }
    }
}

/// 走法：目标格子的 (行, 列)，从 0 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Move {
    /// 创建新走法
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新走法（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查坐标是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 按行优先顺序遍历所有格子
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT).map(|i| Move::new_unchecked((i / BOARD_SIZE) as u8, (i % BOARD_SIZE) as u8))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_chars() {
        assert_eq!(Mark::X.to_char(), 'X');
        assert_eq!(Mark::from_char('o'), Some(Mark::O));
        assert_eq!(Mark::from_char('0'), Some(Mark::O));
        assert_eq!(Mark::from_char('.'), None);
    }

    #[test]
    fn test_opponents() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Role::Maximizer.opponent(), Role::Minimizer);
        assert_eq!(Role::from_maximizing(false), Role::Minimizer);
    }

    #[test]
    fn test_move_bounds() {
        assert!(Move::new(0, 0).is_some());
        assert!(Move::new(2, 2).is_some());
        assert!(Move::new(3, 0).is_none());
        assert!(Move::new(0, 3).is_none());
        assert!(Move::new_unchecked(2, 2).is_valid());
        assert!(!Move::new_unchecked(0, 5).is_valid());
    }

    #[test]
    fn test_move_index() {
        let mv = Move::new_unchecked(1, 2);
        assert_eq!(mv.to_index(), 5);
        assert_eq!(Move::from_index(5), Some(mv));
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_all_moves_row_major() {
        let moves: Vec<Move> = Move::all().collect();
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new_unchecked(0, 0));
        assert_eq!(moves[1], Move::new_unchecked(0, 1));
        assert_eq!(moves[3], Move::new_unchecked(1, 0));
        assert_eq!(moves[8], Move::new_unchecked(2, 2));
    }
}
