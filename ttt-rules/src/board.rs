//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_COUNT, LINES};
use crate::error::{Result, RuleError};
use crate::mark::{Mark, Move};

/// 棋盘
///
/// 3x3 格子，索引为 row * 3 + col。棋盘是 `Copy` 值类型，
/// 搜索时每个分支拿到独立副本，兄弟分支之间互不可见。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 从格子数组创建
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 获取所有格子
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// 获取指定格子的标记
    pub fn get(&self, mv: Move) -> Option<Mark> {
        if mv.is_valid() {
            self.cells[mv.to_index()]
        } else {
            None
        }
    }

    /// 设置指定格子（不检查是否已占用）
    pub fn set(&mut self, mv: Move, cell: Option<Mark>) {
        if mv.is_valid() {
            self.cells[mv.to_index()] = cell;
        }
    }

    pub fn is_occupied(&self, mv: Move) -> bool {
        self.get(mv).is_some()
    }

    /// 统计指定标记的数量
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    /// 已落子数量
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// 所有空格（行优先顺序）
    ///
    /// 顺序决定了选点时的平局裁决，必须保持稳定。
    pub fn available_moves(&self) -> Vec<Move> {
        Move::all().filter(|mv| !self.is_occupied(*mv)).collect()
    }

    /// 落子，返回新棋盘；坐标越界或格子已被占用时返回 `InvalidMove`
    pub fn apply_move(&self, mv: Move, mark: Mark) -> Result<Board> {
        if !mv.is_valid() || self.is_occupied(mv) {
            return Err(RuleError::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(self.with_move(mv, mark))
    }

    /// 落子（不检查规则），搜索内部使用
    pub fn with_move(&self, mv: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.set(mv, Some(mark));
        next
    }

    /// 查找连成一线的标记
    pub fn winning_mark(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(mark) if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) => Some(mark),
            _ => None,
        })
    }

    /// 是否终局：任一方连成一线，或没有空格
    pub fn is_terminal(&self) -> bool {
        self.winning_mark().is_some() || self.is_full()
    }

    /// 检查双方棋子数量之差不超过 1
    pub fn validate(&self) -> Result<()> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x.abs_diff(o) > 1 {
            return Err(RuleError::InvalidBoard {
                reason: format!("mark counts differ by more than one: X={}, O={}", x, o),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            let line: Vec<String> = chunk
                .iter()
                .map(|c| c.map(|m| m.to_char()).unwrap_or(' ').to_string())
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::BoardText;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.marks_placed(), 0);
        assert!(!board.is_full());
        assert!(!board.is_terminal());
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_available_moves_skip_occupied() {
        let board = BoardText::parse("X../.O./..X").unwrap();
        let moves = board.available_moves();

        assert_eq!(moves.len(), 9 - board.marks_placed());
        assert!(moves.iter().all(|mv| !board.is_occupied(*mv)));
        assert_eq!(moves[0], Move::new_unchecked(0, 1));
        assert_eq!(moves[5], Move::new_unchecked(2, 1));
    }

    #[test]
    fn test_apply_move() {
        let board = Board::empty();
        let mv = Move::new_unchecked(1, 1);

        let next = board.apply_move(mv, Mark::X).unwrap();
        assert_eq!(next.get(mv), Some(Mark::X));
        // 原棋盘不变
        assert_eq!(board.get(mv), None);
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = Board::empty().with_move(Move::new_unchecked(0, 2), Mark::O);
        let err = board.apply_move(Move::new_unchecked(0, 2), Mark::X).unwrap_err();
        assert!(matches!(err, RuleError::InvalidMove { row: 0, col: 2 }));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::empty();

        // (0, 5) 的索引落在棋盘内，但列越界
        let err = board.apply_move(Move::new_unchecked(0, 5), Mark::X).unwrap_err();
        assert!(matches!(err, RuleError::InvalidMove { row: 0, col: 5 }));

        // 反序列化得到的越界坐标同样拒绝
        let mv: Move = serde_json::from_str(r#"{"row":0,"col":4}"#).unwrap();
        assert!(board.apply_move(mv, Mark::X).is_err());
        assert!(board.apply_move(Move::new_unchecked(3, 0), Mark::O).is_err());

        assert_eq!(board.get(Move::new_unchecked(0, 5)), None);
        let mut copy = board;
        copy.set(Move::new_unchecked(0, 4), Some(Mark::X));
        assert_eq!(copy, Board::empty());
    }

    #[test]
    fn test_all_winning_lines() {
        let fixtures = [
            "XXX/.O./O..",
            "O../XXX/O..",
            "O../.O./XXX",
            "XO./X.O/X..",
            "OX./.X./.XO",
            "O.X/..X/.OX",
            "XO./OX./..X",
            "O.X/.X./XO.",
        ];
        for text in fixtures {
            let board = BoardText::parse(text).unwrap();
            assert_eq!(board.winning_mark(), Some(Mark::X), "board {}", text);
            assert!(board.is_terminal(), "board {}", text);
        }
    }

    #[test]
    fn test_full_board_draw() {
        let board = BoardText::parse("XOX/XOO/OXX").unwrap();
        assert!(board.is_full());
        assert_eq!(board.winning_mark(), None);
        assert!(board.is_terminal());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_validate_counts() {
        assert!(BoardText::parse("XX./.O./...").unwrap().validate().is_ok());
        assert!(BoardText::parse("XXX/.../...").unwrap().validate().is_err());
    }

    #[test]
    fn test_display() {
        let board = BoardText::parse("X../.O./...").unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().next(), Some("X |   |  "));
    }
}
